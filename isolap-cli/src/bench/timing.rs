use std::time::Duration;

/// Render a duration as `HH:MM:SS.ffffff`.
///
/// Hours are not wrapped, so very long runs show e.g. `123:04:05.000000`.
pub fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!(
        "{:02}:{:02}:{:02}.{:06}",
        hours,
        minutes,
        seconds,
        elapsed.subsec_micros()
    )
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
pub fn as_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
