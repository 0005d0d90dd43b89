mod common;

use petclinic_graph::application::services::ClinicService;
use petclinic_graph::domain::repositories::ClinicStore;
use petclinic_graph::infrastructure::persistence::PgClinicStore;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_owners_by_last_name_prefix(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let store = PgClinicStore::new(Arc::new(pool));

    let mut session = store.begin_read().await.unwrap();
    let rows = session
        .owners_by_last_name(Some("Dav".to_string()))
        .await
        .unwrap();

    let ids: Vec<i32> = rows.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![clinic.davis, clinic.davison]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_prefix_is_literal(pool: PgPool) {
    common::seed_clinic(&pool).await;
    common::create_owner(&pool, "Rosa", "D%vies").await;
    let store = PgClinicStore::new(Arc::new(pool));

    let mut session = store.begin_read().await.unwrap();
    let rows = session
        .owners_by_last_name(Some("D%".to_string()))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].last_name, "D%vies");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_descendants_single_batch(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let store = PgClinicStore::new(Arc::new(pool));

    let mut session = store.begin_read().await.unwrap();
    let rows = session
        .descendants(&[clinic.franklin, clinic.davis, clinic.davison])
        .await
        .unwrap();

    assert_eq!(rows.pets.len(), 3);
    assert_eq!(rows.pet_types.len(), 2);
    assert_eq!(rows.visits.len(), 3);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_load_owner_links_graph(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let owner = service.load_owner(clinic.davis).await.unwrap().unwrap();

    assert_eq!(owner.last_name, "Davis");
    assert_eq!(owner.pets.len(), 2);
    for pet in owner.pets() {
        assert!(std::ptr::eq(pet.owner(), &owner));
        for visit in pet.visits() {
            assert_eq!(visit.pet().id, pet.id);
        }
    }

    let max = owner.pet(clinic.max).unwrap();
    assert_eq!(max.pet_type.name, "cat");
    assert_eq!(max.visits().count(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_load_owner_missing(pool: PgPool) {
    common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    assert!(service.load_owner(9999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_visits_most_recent_first(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let graph = service.load_pet(clinic.leo).await.unwrap().unwrap();

    let ids: Vec<i32> = graph.pet().visits().map(|v| v.id).collect();
    assert_eq!(ids, vec![clinic.leo_spayed, clinic.leo_rabies]);
    assert_eq!(graph.owner().id, clinic.franklin);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pets_of_one_load_share_type(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let owners = service.load_owners(None).await.unwrap();

    let leo = owners
        .iter()
        .find_map(|o| o.pet(clinic.leo))
        .unwrap();
    let max = owners
        .iter()
        .find_map(|o| o.pet(clinic.max))
        .unwrap();
    assert!(Arc::ptr_eq(&leo.pet_type, &max.pet_type));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_load_visit_through_owner(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let graph = service
        .load_visit(clinic.max_neutered)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(graph.visit().description, "neutered");
    assert_eq!(graph.visit().pet().id, clinic.max);
    assert_eq!(graph.visit().pet().owner().id, clinic.davis);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pet_types_ordered_by_name(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let types = service.list_pet_types().await.unwrap();
    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cat", "dog"]);

    let dog = service.get_pet_type(clinic.dog).await.unwrap().unwrap();
    assert_eq!(dog.name, "dog");
    assert!(service.get_pet_type(9999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_pets_and_visits_follow_owner_order(pool: PgPool) {
    let clinic = common::seed_clinic(&pool).await;
    let service = ClinicService::new(Arc::new(PgClinicStore::new(Arc::new(pool))));

    let pets = service.list_pets().await.unwrap();
    let pet_ids: Vec<i32> = pets.iter().map(|g| g.pet().id).collect();
    assert_eq!(pet_ids, vec![clinic.basil, clinic.max, clinic.leo]);
    assert_eq!(pets[2].pet().owner().id, clinic.franklin);

    let visits = service.list_visits().await.unwrap();
    let visit_ids: Vec<i32> = visits.iter().map(|g| g.visit().id).collect();
    assert_eq!(
        visit_ids,
        vec![clinic.max_neutered, clinic.leo_spayed, clinic.leo_rabies]
    );
    assert_eq!(visits[0].visit().pet().owner().id, clinic.davis);
}
