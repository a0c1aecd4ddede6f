//! Dashboard KPI arithmetic.
//!
//! The counts themselves come from the database on every dashboard read;
//! this module holds the thresholds and the summary shape.

use serde::Serialize;

/// Equipment with health strictly below this value is critical.
pub const CRITICAL_HEALTH_THRESHOLD: i16 = 30;

/// Reported technician load when no technicians exist.
pub const DEFAULT_TECH_LOAD: i64 = 0;

/// Point-in-time dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    /// Equipment with health below [`CRITICAL_HEALTH_THRESHOLD`].
    pub critical_count: i64,
    /// Average technician load in percent, truncated.
    pub tech_load: i64,
    /// Requests not in a closed stage.
    pub open_requests: i64,
    /// Requests flagged overdue.
    pub overdue: i64,
}

/// Whether an equipment health value counts as critical.
pub fn is_critical(health: i16) -> bool {
    health < CRITICAL_HEALTH_THRESHOLD
}

/// Truncating average of technician loads.
pub fn average_load(total: i64, count: i64) -> i64 {
    if count <= 0 {
        DEFAULT_TECH_LOAD
    } else {
        total / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_threshold_is_exclusive() {
        assert!(is_critical(0));
        assert!(is_critical(29));
        assert!(!is_critical(30));
        assert!(!is_critical(100));
    }

    #[test]
    fn average_truncates() {
        assert_eq!(average_load(100, 3), 33);
        assert_eq!(average_load(170, 2), 85);
    }

    #[test]
    fn no_technicians_falls_back() {
        assert_eq!(average_load(0, 0), DEFAULT_TECH_LOAD);
    }
}
