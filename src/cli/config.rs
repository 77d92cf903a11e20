//! `payday init`, `payday config` and `payday categories`

use crate::config::{PaydayPaths, Settings};
use crate::error::PaydayResult;
use crate::logging::LOG_ENV;
use crate::models::DEFAULT_CATEGORIES;

/// Write the current settings so they can be edited by hand
pub fn handle_init_command(paths: &PaydayPaths, settings: &Settings) -> PaydayResult<()> {
    settings.save(paths)?;
    println!("Wrote settings to {}", paths.settings_file().display());
    Ok(())
}

pub fn handle_config_command(paths: &PaydayPaths, settings: &Settings) -> PaydayResult<()> {
    println!("Payday Configuration");
    println!("====================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not written yet)" }
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol:    {}", settings.currency_symbol);
    println!("  Date format:        {}", settings.date_format);
    println!("  Near-limit percent: {}", settings.near_limit_percent);
    println!("  Transaction limit:  {}", settings.transaction_limit);
    println!("  Log filter:         {} (override with {})", settings.log_filter, LOG_ENV);
    Ok(())
}

pub fn handle_categories_command() -> PaydayResult<()> {
    for category in DEFAULT_CATEGORIES {
        println!("{}", category);
    }
    Ok(())
}
