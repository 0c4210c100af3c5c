//! Timestamp formatting for preview labels

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour up.
///
/// Fractions are truncated. Negative or non-finite input renders as `0:00`.
pub fn format_timestamp(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
