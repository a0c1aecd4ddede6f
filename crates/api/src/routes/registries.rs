//! Route definitions for the reference registries.
//!
//! Every registry has the same shape: a plural list route, a singular
//! get route, and POST routes for save and delete.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{categories, equipment, teams, technicians, users, work_centers};
use crate::state::AppState;

/// Registry routes, merged into the `/api` tree.
///
/// ```text
/// GET  /equipment                     -> equipment::list
/// POST /equipment/save                -> equipment::save
/// POST /equipment/delete/{id}         -> equipment::delete
/// GET  /equipment/{id}                -> equipment::get_by_id
///
/// GET  /teams                         -> teams::list
/// POST /team/save                     -> teams::save
/// POST /team/delete/{id}              -> teams::delete
/// GET  /team/{id}                     -> teams::get_by_id
///
/// GET  /work-centers                  -> work_centers::list
/// POST /work-center/save              -> work_centers::save
/// POST /work-center/delete/{id}       -> work_centers::delete
/// GET  /work-center/{id}              -> work_centers::get_by_id
///
/// GET  /categories                    -> categories::list
/// POST /category/save                 -> categories::save
/// POST /category/quick-add            -> categories::quick_add
/// POST /category/delete/{id}          -> categories::delete
/// GET  /category/{id}                 -> categories::get_by_id
///
/// GET  /technicians                   -> technicians::list
/// POST /technician/save               -> technicians::save
/// POST /technician/delete/{id}        -> technicians::delete
/// GET  /technician/{id}               -> technicians::get_by_id
///
/// GET  /users                         -> users::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Equipment
        .route("/equipment", get(equipment::list))
        .route("/equipment/save", post(equipment::save))
        .route("/equipment/delete/{id}", post(equipment::delete))
        .route("/equipment/{id}", get(equipment::get_by_id))
        // Teams
        .route("/teams", get(teams::list))
        .route("/team/save", post(teams::save))
        .route("/team/delete/{id}", post(teams::delete))
        .route("/team/{id}", get(teams::get_by_id))
        // Work centers
        .route("/work-centers", get(work_centers::list))
        .route("/work-center/save", post(work_centers::save))
        .route("/work-center/delete/{id}", post(work_centers::delete))
        .route("/work-center/{id}", get(work_centers::get_by_id))
        // Categories
        .route("/categories", get(categories::list))
        .route("/category/save", post(categories::save))
        .route("/category/quick-add", post(categories::quick_add))
        .route("/category/delete/{id}", post(categories::delete))
        .route("/category/{id}", get(categories::get_by_id))
        // Technicians
        .route("/technicians", get(technicians::list))
        .route("/technician/save", post(technicians::save))
        .route("/technician/delete/{id}", post(technicians::delete))
        .route("/technician/{id}", get(technicians::get_by_id))
        // Users
        .route("/users", get(users::list))
}
