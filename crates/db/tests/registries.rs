//! Integration tests for the reference registries.

use maintrack_db::models::category::SaveCategory;
use maintrack_db::models::equipment::SaveEquipment;
use maintrack_db::models::team::SaveTeam;
use maintrack_db::models::user::CreateUser;
use maintrack_db::models::work_center::SaveWorkCenter;
use maintrack_db::repositories::{CategoryRepo, EquipmentRepo, TeamRepo, UserRepo, WorkCenterRepo};
use maintrack_core::equipment::EquipmentStatus;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn bootstrap_health_check(pool: PgPool) {
    maintrack_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn equipment_defaults_and_status(pool: PgPool) {
    let input = SaveEquipment {
        id: None,
        name: "Drill".to_string(),
        serial_number: Some("SN-1".to_string()),
        category: None,
        department: None,
        company: None,
        health: None,
        scrap_date: None,
    };
    let created = EquipmentRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.health, 100);
    assert_eq!(created.category, "");
    assert_eq!(created.status(), EquipmentStatus::Active);

    let scrapped = SaveEquipment {
        scrap_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 31),
        ..input
    };
    let updated = EquipmentRepo::update(&pool, created.id, &scrapped)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.health, 100, "omitted health keeps the stored value");
    assert_eq!(updated.status(), EquipmentStatus::Scrapped);
    assert_eq!(
        EquipmentRepo::find_name(&pool, created.id).await.unwrap().as_deref(),
        Some("Drill")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn health_outside_bounds_is_rejected_by_the_table(pool: PgPool) {
    let result = sqlx::query("INSERT INTO equipment (name, health) VALUES ('X', 101)")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn team_members_round_trip(pool: PgPool) {
    let team = TeamRepo::create(
        &pool,
        &SaveTeam {
            id: None,
            name: "Metrology".to_string(),
            company: None,
            members: vec!["Marc Demo".to_string(), "Aka Foster".to_string()],
        },
    )
    .await
    .unwrap();
    let fetched = TeamRepo::find_by_id(&pool, team.id).await.unwrap().unwrap();
    assert_eq!(fetched.members, ["Marc Demo", "Aka Foster"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn work_center_name_lookup(pool: PgPool) {
    let wc = WorkCenterRepo::create(
        &pool,
        &SaveWorkCenter {
            id: None,
            name: "Assembly 1".to_string(),
            code: Some("ASM1".to_string()),
            tag: None,
            cost_per_hour: Some(42.5),
            capacity: None,
            time_efficiency: Some(95.0),
            oee_target: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        WorkCenterRepo::find_name(&pool, wc.id).await.unwrap().as_deref(),
        Some("Assembly 1")
    );
    assert_eq!(WorkCenterRepo::find_name(&pool, wc.id + 1).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn category_quick_add_returns_existing(pool: PgPool) {
    let first = CategoryRepo::quick_add(&pool, "Computers").await.unwrap();
    let second = CategoryRepo::quick_add(&pool, "Computers").await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(CategoryRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_category_name_violates_unique_constraint(pool: PgPool) {
    let input = SaveCategory {
        id: None,
        name: "Monitors".to_string(),
        responsible: None,
        company: None,
    };
    CategoryRepo::create(&pool, &input).await.unwrap();
    let err = CategoryRepo::create(&pool, &input).await.unwrap_err();
    let constraint = err
        .as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string);
    assert_eq!(constraint.as_deref(), Some("uq_categories_name"));
}

#[sqlx::test(migrations = "./migrations")]
async fn users_default_to_user_role(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(user.role, maintrack_core::roles::ROLE_USER);
    assert!(UserRepo::email_exists(&pool, "ada@example.com").await.unwrap());
    assert!(!UserRepo::email_exists(&pool, "bob@example.com").await.unwrap());
}
