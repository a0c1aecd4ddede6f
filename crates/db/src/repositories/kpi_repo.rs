//! Dashboard KPI queries.
//!
//! All figures are recomputed from the tables on every call. One statement
//! gathers every count, so the numbers come from a single snapshot.

use maintrack_core::kpi::{average_load, KpiSummary, CRITICAL_HEALTH_THRESHOLD};
use maintrack_core::stage::CLOSED_STAGES;
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct KpiCounts {
    critical_count: i64,
    open_requests: i64,
    overdue: i64,
    total_load: i64,
    technician_count: i64,
}

/// Read-only KPI aggregation.
pub struct KpiRepo;

impl KpiRepo {
    /// Compute the dashboard summary.
    pub async fn summary(pool: &PgPool) -> Result<KpiSummary, sqlx::Error> {
        let closed: Vec<String> = CLOSED_STAGES.iter().map(|s| s.to_string()).collect();
        let counts = sqlx::query_as::<_, KpiCounts>(
            "SELECT
                (SELECT COUNT(*) FROM equipment WHERE health < $1) AS critical_count,
                (SELECT COUNT(*) FROM maintenance_requests
                  WHERE stage <> ALL($2)) AS open_requests,
                (SELECT COUNT(*) FROM maintenance_requests WHERE is_overdue) AS overdue,
                (SELECT COALESCE(SUM(current_load), 0)::BIGINT FROM technicians) AS total_load,
                (SELECT COUNT(*) FROM technicians) AS technician_count",
        )
        .bind(CRITICAL_HEALTH_THRESHOLD)
        .bind(&closed)
        .fetch_one(pool)
        .await?;

        tracing::debug!(?counts, "KPI counts read");

        Ok(KpiSummary {
            critical_count: counts.critical_count,
            tech_load: average_load(counts.total_load, counts.technician_count),
            open_requests: counts.open_requests,
            overdue: counts.overdue,
        })
    }
}
