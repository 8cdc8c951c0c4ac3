//! Formatting helpers for presenting statistics.

/// Percentage with two decimal places, e.g. `12.35%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Signed delta with two decimal places. Non-negative values carry a `+`.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Signed delta with one decimal place, used for axis ticks.
pub fn format_signed_percent_1dp(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Compact count for the header counters: `1.2M`, `3.4K`, plain below 1000.
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Display label for a game-version identifier. Two identifiers are known by
/// name, everything else falls back to a generic label.
pub fn version_label(version: &str) -> String {
    match version {
        "10801" => "Tekken 8 (Latest)".to_string(),
        "10701" => "Tekken 8 (Previous)".to_string(),
        other => format!("Version {other}"),
    }
}
