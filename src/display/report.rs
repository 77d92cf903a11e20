//! Report formatting utilities for terminal output

/// Format a whole-number percentage
pub fn format_percentage(pct: i64) -> String {
    format!("{}%", pct)
}

/// Create a simple bar chart representation, capped at full width
pub fn format_bar(percent: i64, width: usize) -> String {
    if percent <= 0 {
        return "░".repeat(width);
    }

    let filled = ((percent.min(100) as usize) * width + 50) / 100;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with a rule underneath
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count().max(40)))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
