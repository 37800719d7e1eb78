// Host-side tests for the countdown formatter.

use card_core::format_countdown;

const MINUTE: f64 = 60_000.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

#[test]
fn zero_or_past_means_the_day_arrived() {
    assert_eq!(format_countdown(0.0), "It’s Valentine’s Day 💘");
    assert_eq!(format_countdown(-5_000.0), "It’s Valentine’s Day 💘");
}

#[test]
fn days_tier_includes_hours_and_minutes() {
    let s = format_countdown(2.0 * DAY + 3.0 * HOUR + 4.0 * MINUTE);
    assert_eq!(s, "2 days • 3h 4m to Feb 14");
}

#[test]
fn one_day_is_singular() {
    let s = format_countdown(DAY + HOUR);
    assert_eq!(s, "1 day • 1h 0m to Feb 14");
}

#[test]
fn hours_tier_drops_the_day_part() {
    assert_eq!(format_countdown(5.0 * HOUR + 30.0 * MINUTE), "5h 30m to Feb 14");
}

#[test]
fn minutes_tier_pluralizes() {
    assert_eq!(format_countdown(MINUTE), "1 minute to Feb 14");
    assert_eq!(format_countdown(12.0 * MINUTE), "12 minutes to Feb 14");
}

#[test]
fn sub_minute_remainder_rounds_down() {
    assert_eq!(format_countdown(59_000.0), "0 minutes to Feb 14");
}
