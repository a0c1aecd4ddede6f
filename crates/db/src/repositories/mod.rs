//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod equipment_repo;
pub mod kpi_repo;
pub mod request_repo;
pub mod team_repo;
pub mod technician_repo;
pub mod user_repo;
pub mod work_center_repo;

pub use category_repo::CategoryRepo;
pub use equipment_repo::EquipmentRepo;
pub use kpi_repo::KpiRepo;
pub use request_repo::RequestRepo;
pub use team_repo::TeamRepo;
pub use technician_repo::TechnicianRepo;
pub use user_repo::UserRepo;
pub use work_center_repo::WorkCenterRepo;
