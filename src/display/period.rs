//! Pay period display

use chrono::NaiveDate;

use super::report::format_header;
use crate::models::ResolvedPeriod;
use crate::services::period::PeriodService;

/// Format the resolved period with the upcoming paydays
pub fn format_period(resolved: &ResolvedPeriod, today: NaiveDate, paydays: &[NaiveDate], date_format: &str) -> String {
    let period = &resolved.period;
    let mut output = format_header(&format!(
        "Pay period {}",
        PeriodService::format_period_friendly(period)
    ));

    output.push_str(&format!(
        "Range:          {} to {} (exclusive)\n",
        period.start.format(date_format),
        period.end.format(date_format)
    ));
    output.push_str(&format!(
        "Days remaining: {}\n",
        PeriodService::days_remaining(period, today)
    ));

    if resolved.is_stale {
        output.push_str(&format!(
            "Stored payday has passed; next payday is now {}\n",
            resolved.next_payday.format(date_format)
        ));
    }

    if resolved.starts_after(today) {
        output.push_str(&format!(
            "Period has not started; stored payday {} is more than one cadence away\n",
            resolved.next_payday.format(date_format)
        ));
    }

    if !paydays.is_empty() {
        output.push_str("\nUpcoming paydays:\n");
        for payday in paydays {
            output.push_str(&format!("  {}\n", payday.format(date_format)));
        }
    }

    output
}
