//! Countdown text for the time remaining until the target date.

/// Format milliseconds-until-target into the display string. Negative input
/// means the day has arrived.
pub fn format_countdown(ms_remaining: f64) -> String {
    if ms_remaining <= 0.0 {
        return "It’s Valentine’s Day 💘".to_string();
    }
    let sec = (ms_remaining / 1000.0).floor() as u64;
    let days = sec / (3600 * 24);
    let hours = (sec % (3600 * 24)) / 3600;
    let mins = (sec % 3600) / 60;

    if days > 0 {
        format!(
            "{days} day{} • {hours}h {mins}m to Feb 14",
            if days == 1 { "" } else { "s" }
        )
    } else if hours > 0 {
        format!("{hours}h {mins}m to Feb 14")
    } else {
        format!(
            "{mins} minute{} to Feb 14",
            if mins == 1 { "" } else { "s" }
        )
    }
}
