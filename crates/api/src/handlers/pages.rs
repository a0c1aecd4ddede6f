//! Page routes.
//!
//! Each page answers with the JSON its view is rendered from. Without a
//! session the browser is redirected to `/`.

use axum::extract::State;
use axum::Json;
use maintrack_core::request::MaintenanceType;
use maintrack_db::models::category::Category;
use maintrack_db::models::equipment::EquipmentResponse;
use maintrack_db::models::request::RequestResponse;
use maintrack_db::models::team::Team;
use maintrack_db::models::technician::Technician;
use maintrack_db::models::work_center::WorkCenter;
use maintrack_db::repositories::{
    CategoryRepo, EquipmentRepo, RequestRepo, TeamRepo, TechnicianRepo, WorkCenterRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::dashboard::{load_dashboard_data, DashboardData};
use crate::handlers::requests::project_all;
use crate::middleware::session::{RequirePageSession, SessionUser};
use crate::state::AppState;

/// The signed-in user as shown in the page header.
#[derive(Debug, Serialize)]
pub struct PageUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl From<SessionUser> for PageUser {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name,
            role: user.role,
        }
    }
}

/// Dashboard page data: KPIs, requests and the form's option lists.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub active_page: &'static str,
    pub user: PageUser,
    #[serde(flatten)]
    pub data: DashboardData,
}

#[derive(Debug, Serialize)]
pub struct EquipmentPage {
    pub active_page: &'static str,
    pub user: PageUser,
    pub equipment: Vec<EquipmentResponse>,
    pub work_centers: Vec<WorkCenter>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct TeamsPage {
    pub active_page: &'static str,
    pub user: PageUser,
    pub teams: Vec<Team>,
    pub technicians: Vec<Technician>,
}

/// Calendar page data: preventive requests only.
#[derive(Debug, Serialize)]
pub struct CalendarPage {
    pub active_page: &'static str,
    pub user: PageUser,
    pub requests: Vec<RequestResponse>,
}

/// GET /dashboard
pub async fn dashboard(
    RequirePageSession(user): RequirePageSession,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardPage>> {
    let data = load_dashboard_data(&state.pool).await?;

    Ok(Json(DashboardPage {
        active_page: "dashboard",
        user: user.into(),
        data,
    }))
}

/// GET /equipment
pub async fn equipment(
    RequirePageSession(user): RequirePageSession,
    State(state): State<AppState>,
) -> AppResult<Json<EquipmentPage>> {
    let equipment = EquipmentRepo::list(&state.pool).await?;

    Ok(Json(EquipmentPage {
        active_page: "equipment",
        user: user.into(),
        equipment: equipment.into_iter().map(EquipmentResponse::from).collect(),
        work_centers: WorkCenterRepo::list(&state.pool).await?,
        categories: CategoryRepo::list(&state.pool).await?,
    }))
}

/// GET /teams
pub async fn teams(
    RequirePageSession(user): RequirePageSession,
    State(state): State<AppState>,
) -> AppResult<Json<TeamsPage>> {
    Ok(Json(TeamsPage {
        active_page: "teams",
        user: user.into(),
        teams: TeamRepo::list(&state.pool).await?,
        technicians: TechnicianRepo::list(&state.pool).await?,
    }))
}

/// GET /calendar
pub async fn calendar(
    RequirePageSession(user): RequirePageSession,
    State(state): State<AppState>,
) -> AppResult<Json<CalendarPage>> {
    let rows = RequestRepo::list_by_type(&state.pool, MaintenanceType::Preventive).await?;

    Ok(Json(CalendarPage {
        active_page: "calendar",
        user: user.into(),
        requests: project_all(rows)?,
    }))
}
