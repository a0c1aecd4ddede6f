//! Dashboard data: KPI figures plus every list the request form needs.

use axum::extract::State;
use axum::Json;
use maintrack_core::kpi::KpiSummary;
use maintrack_db::models::category::Category;
use maintrack_db::models::equipment::EquipmentResponse;
use maintrack_db::models::request::RequestResponse;
use maintrack_db::models::team::Team;
use maintrack_db::models::technician::Technician;
use maintrack_db::models::user::UserOption;
use maintrack_db::models::work_center::WorkCenter;
use maintrack_db::repositories::{
    CategoryRepo, EquipmentRepo, KpiRepo, RequestRepo, TeamRepo, TechnicianRepo, UserRepo,
    WorkCenterRepo,
};
use maintrack_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::requests::project_all;
use crate::middleware::session::RequireSession;
use crate::state::AppState;

/// KPI figures, the request list and every option list the request form
/// needs. Served by `GET /api/equipment-data` and embedded in the
/// `GET /dashboard` page.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub kpi: KpiSummary,
    pub requests: Vec<RequestResponse>,
    pub equipment: Vec<EquipmentResponse>,
    pub work_centers: Vec<WorkCenter>,
    pub categories: Vec<Category>,
    pub teams: Vec<Team>,
    pub technicians: Vec<Technician>,
    pub users: Vec<UserOption>,
}

/// Read the dashboard payload. KPIs are recomputed on every call.
pub(crate) async fn load_dashboard_data(pool: &DbPool) -> AppResult<DashboardData> {
    let kpi = KpiRepo::summary(pool).await?;
    let requests = project_all(RequestRepo::list(pool).await?)?;
    let equipment = EquipmentRepo::list(pool).await?;
    let users = UserRepo::list(pool).await?;

    Ok(DashboardData {
        kpi,
        requests,
        equipment: equipment.into_iter().map(EquipmentResponse::from).collect(),
        work_centers: WorkCenterRepo::list(pool).await?,
        categories: CategoryRepo::list(pool).await?,
        teams: TeamRepo::list(pool).await?,
        technicians: TechnicianRepo::list(pool).await?,
        users: users.into_iter().map(UserOption::from).collect(),
    })
}

/// GET /api/equipment-data
pub async fn equipment_data(
    RequireSession(_user): RequireSession,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardData>> {
    Ok(Json(load_dashboard_data(&state.pool).await?))
}
