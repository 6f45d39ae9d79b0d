use chrono::{DateTime, NaiveDateTime};

/// Shown in place of missing or unparseable values
pub const EMPTY_PLACEHOLDER: &str = "—";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %-I:%M %p";

/// Formats a millisecond duration as `850ms`, `1.5s` or `2m 5.0s`.
///
/// Seconds carry one decimal, rounded from their nearest `f64` value, so
/// `1150` reads `1.1s` because `1.15` is stored just below the midpoint.
pub fn format_duration(ms: u64) -> String {
    if ms < 1_000 {
        return format!("{}ms", ms);
    }
    if ms < 60_000 {
        return format!("{}s", seconds_to_tenths(ms));
    }
    let minutes = ms / 60_000;
    format!("{}m {}s", minutes, seconds_to_tenths(ms % 60_000))
}

fn seconds_to_tenths(ms: u64) -> String {
    // x.25 and x.75 are exact in binary; those midpoints round up
    if ms % 500 == 250 {
        let tenths = (ms + 50) / 100;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", ms as f64 / 1_000.0)
}

/// Formats a server timestamp as `dd/MM/yyyy h:mm AM`.
///
/// Accepts RFC 3339 and offset-less ISO 8601 values; anything else renders as
/// the placeholder.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(TIMESTAMP_FORMAT).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}
