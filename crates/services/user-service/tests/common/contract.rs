//! Contract checks shared by every `UserService` implementation.

use std::sync::Arc;

use ::common::AppError;
use domain::{SaveUser, UpdateUser, User};
use user_service_lib::service::UserService;

pub fn assert_same_user(actual: &User, expected: &User) {
    assert_eq!(actual.user_id, expected.user_id);
    assert_eq!(actual.name, expected.name);
    assert_eq!(actual.email, expected.email);
}

pub async fn save_then_get_returns_equivalent_record(service: Arc<dyn UserService>) {
    let saved = service
        .save_user(SaveUser::new("Ada Lovelace", "ada@example.com"))
        .await
        .expect("save failed");

    let fetched = service
        .get_user_by_id(saved.user_id)
        .await
        .expect("fetch failed");

    assert_same_user(&fetched, &saved);
    assert_eq!(fetched.name, "Ada Lovelace");
    assert_eq!(fetched.email, "ada@example.com");
}

pub async fn get_all_contains_every_live_record(service: Arc<dyn UserService>) {
    assert!(service.get_all_users().await.unwrap().is_empty());

    let ada = service
        .save_user(SaveUser::new("Ada", "ada@example.com"))
        .await
        .unwrap();
    let grace = service
        .save_user(SaveUser::new("Grace", "grace@example.com"))
        .await
        .unwrap();
    let linus = service
        .save_user(SaveUser::new("Linus", "linus@example.com"))
        .await
        .unwrap();
    service.delete_user(grace.user_id).await.unwrap();

    let all = service.get_all_users().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_same_user(&all[0], &ada);
    assert_same_user(&all[1], &linus);
}

pub async fn update_is_visible_to_later_reads(service: Arc<dyn UserService>) {
    let saved = service
        .save_user(SaveUser::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    let updated = service
        .update_user(UpdateUser {
            user_id: saved.user_id,
            name: Some("Ada King".to_string()),
            email: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Ada King");
    assert_eq!(updated.email, "ada@example.com");

    let fetched = service.get_user_by_id(saved.user_id).await.unwrap();
    assert_same_user(&fetched, &updated);
    assert!(fetched.updated_at >= saved.updated_at);
}

pub async fn delete_removes_record(service: Arc<dyn UserService>) {
    let saved = service
        .save_user(SaveUser::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    service.delete_user(saved.user_id).await.unwrap();

    assert!(matches!(
        service.get_user_by_id(saved.user_id).await,
        Err(AppError::NotFound)
    ));
    assert!(service
        .get_all_users()
        .await
        .unwrap()
        .iter()
        .all(|u| u.user_id != saved.user_id));
}

pub async fn missing_ids_fail_without_touching_others(service: Arc<dyn UserService>) {
    let keeper = service
        .save_user(SaveUser::new("Keeper", "keeper@example.com"))
        .await
        .unwrap();
    let missing = keeper.user_id + 1000;

    assert!(matches!(
        service.get_user_by_id(missing).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service
            .update_user(UpdateUser {
                user_id: missing,
                name: Some("Ghost".to_string()),
                email: Some("ghost@example.com".to_string()),
            })
            .await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.delete_user(missing).await,
        Err(AppError::NotFound)
    ));

    let all = service.get_all_users().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_same_user(&all[0], &keeper);
}

pub async fn save_with_existing_id_replaces(service: Arc<dyn UserService>) {
    let original = service
        .save_user(SaveUser::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    let replaced = service
        .save_user(SaveUser::with_id(
            original.user_id,
            "Grace",
            "grace@example.com",
        ))
        .await
        .unwrap();

    assert_eq!(replaced.user_id, original.user_id);
    assert_eq!(replaced.name, "Grace");
    assert_eq!(replaced.email, "grace@example.com");
    assert_eq!(service.get_all_users().await.unwrap().len(), 1);
}

pub async fn save_with_unknown_id_creates(service: Arc<dyn UserService>) {
    let first = service
        .save_user(SaveUser::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    let created = service
        .save_user(SaveUser::with_id(
            first.user_id + 500,
            "Grace",
            "grace@example.com",
        ))
        .await
        .unwrap();

    assert_ne!(created.user_id, first.user_id);
    let fetched = service.get_user_by_id(created.user_id).await.unwrap();
    assert_same_user(&fetched, &created);
    assert_eq!(service.get_all_users().await.unwrap().len(), 2);
}
