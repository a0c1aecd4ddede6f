//! Calendar projection: event colours and end times.

use chrono::Duration;

use crate::request::{MaintenanceType, StatusColor};
use crate::types::Timestamp;

pub const COLOR_RED: &str = "#ff3b30";
pub const COLOR_GREEN: &str = "#34c759";
pub const COLOR_PREVENTIVE: &str = "#af52de";
pub const COLOR_DEFAULT: &str = "#007aff";

/// Pick the event colour for a request.
///
/// An explicit red or green status colour wins over the type-based default;
/// grey (the initial value) does not count as explicit.
pub fn event_color(status_color: Option<StatusColor>, kind: Option<MaintenanceType>) -> &'static str {
    match (status_color, kind) {
        (Some(StatusColor::Red), _) => COLOR_RED,
        (Some(StatusColor::Green), _) => COLOR_GREEN,
        (_, Some(MaintenanceType::Preventive)) => COLOR_PREVENTIVE,
        _ => COLOR_DEFAULT,
    }
}

/// Longest duration that yields an event end: one year.
pub const MAX_DURATION_HOURS: i64 = 24 * 365;

/// Parse a request duration. Accepts `HH:MM` or a plain number of hours
/// (`2`, `1.5`). Returns `None` for anything else, including durations
/// longer than [`MAX_DURATION_HOURS`].
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if let Some((h, m)) = raw.split_once(':') {
        let hours: i64 = h.parse().ok()?;
        let minutes: i64 = m.parse().ok()?;
        if !(0..=MAX_DURATION_HOURS).contains(&hours) || !(0..60).contains(&minutes) {
            return None;
        }
        return Duration::try_minutes(hours * 60 + minutes);
    }
    let hours: f64 = raw.parse().ok()?;
    if !hours.is_finite() || !(0.0..=MAX_DURATION_HOURS as f64).contains(&hours) {
        return None;
    }
    Duration::try_minutes((hours * 60.0).round() as i64)
}

/// End of an event starting at `start` that lasts `duration`, if the
/// duration is parseable and the end is representable.
pub fn event_end(start: &Timestamp, duration: &str) -> Option<Timestamp> {
    parse_duration(duration).and_then(|d| start.checked_add_signed(d))
}
