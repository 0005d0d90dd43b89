#![allow(dead_code)]

use chrono::NaiveDate;
use petclinic_graph::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn create_pet_type(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO types (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_owner(pool: &PgPool, first_name: &str, last_name: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO owners (first_name, last_name, address, city, telephone)
         VALUES ($1, $2, '110 W. Liberty St.', 'Madison', '6085551023') RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_pet(pool: &PgPool, name: &str, type_id: i32, owner_id: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO pets (name, birth_date, type_id, owner_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(date("2010-09-07"))
    .bind(type_id)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_visit(pool: &PgPool, pet_id: i32, visit_date: &str, description: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO visits (pet_id, visit_date, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(pet_id)
    .bind(date(visit_date))
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Ids created by [`seed_clinic`].
pub struct Clinic {
    pub cat: i32,
    pub dog: i32,
    pub franklin: i32,
    pub davis: i32,
    pub davison: i32,
    pub leo: i32,
    pub basil: i32,
    pub max: i32,
    pub leo_rabies: i32,
    pub leo_spayed: i32,
    pub max_neutered: i32,
}

/// Three owners, three pets of two types, three visits.
///
/// Davis owns Basil and Max; Franklin owns Leo; Davison owns nothing.
pub async fn seed_clinic(pool: &PgPool) -> Clinic {
    let cat = create_pet_type(pool, "cat").await;
    let dog = create_pet_type(pool, "dog").await;

    let franklin = create_owner(pool, "George", "Franklin").await;
    let davis = create_owner(pool, "Betty", "Davis").await;
    let davison = create_owner(pool, "Harold", "Davison").await;

    let leo = create_pet(pool, "Leo", cat, franklin).await;
    let basil = create_pet(pool, "Basil", dog, davis).await;
    let max = create_pet(pool, "Max", cat, davis).await;

    let leo_rabies = create_visit(pool, leo, "2013-01-01", "rabies shot").await;
    let leo_spayed = create_visit(pool, leo, "2013-01-04", "spayed").await;
    let max_neutered = create_visit(pool, max, "2013-01-02", "neutered").await;

    Clinic {
        cat,
        dog,
        franklin,
        davis,
        davison,
        leo,
        basil,
        max,
        leo_rabies,
        leo_spayed,
        max_neutered,
    }
}
