//! gRPC adapter tests.
//!
//! Drives `UserGrpcService` directly with tonic requests over a real
//! `UserManager` and in-memory store, without opening a socket.

mod common;

use proto::user::{
    user_service_server::UserService as UserServiceProto, DeleteUserRequest, GetAllUsersRequest,
    GetUserRequest, SaveUserRequest, UpdateUserRequest,
};
use tonic::{Code, Request};
use user_service_lib::grpc::UserGrpcService;

fn grpc_service() -> UserGrpcService {
    UserGrpcService::new(common::memory_service())
}

fn save_request(user_id: Option<i32>, name: &str, email: &str) -> Request<SaveUserRequest> {
    Request::new(SaveUserRequest {
        user_id,
        name: name.to_string(),
        email: email.to_string(),
    })
}

#[tokio::test]
async fn test_full_lifecycle() {
    let grpc = grpc_service();

    let created = grpc
        .save_user(save_request(None, "Ada", "ada@example.com"))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(created.user_id, 1);

    let updated = grpc
        .update_user(Request::new(UpdateUserRequest {
            user_id: created.user_id,
            name: None,
            email: Some("countess@example.com".to_string()),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.email, "countess@example.com");

    let fetched = grpc
        .get_user_by_id(Request::new(GetUserRequest {
            user_id: created.user_id,
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched, updated);

    let deleted = grpc
        .delete_user(Request::new(DeleteUserRequest {
            user_id: created.user_id,
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let listed = grpc
        .get_all_users(Request::new(GetAllUsersRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(listed.total, 0);
    assert!(listed.users.is_empty());
}

#[tokio::test]
async fn test_list_reports_total_in_id_order() {
    let grpc = grpc_service();
    for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
        grpc.save_user(save_request(None, name, email))
            .await
            .unwrap();
    }

    let listed = grpc
        .get_all_users(Request::new(GetAllUsersRequest {}))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(listed.total, 2);
    let names: Vec<&str> = listed.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
}

#[tokio::test]
async fn test_save_with_existing_id_replaces() {
    let grpc = grpc_service();
    let created = grpc
        .save_user(save_request(None, "Ada", "ada@example.com"))
        .await
        .unwrap()
        .into_inner();

    let replaced = grpc
        .save_user(save_request(
            Some(created.user_id),
            "Grace",
            "grace@example.com",
        ))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(replaced.user_id, created.user_id);
    assert_eq!(replaced.name, "Grace");
    assert_eq!(replaced.created_at, created.created_at);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let grpc = grpc_service();

    let get = grpc
        .get_user_by_id(Request::new(GetUserRequest { user_id: 404 }))
        .await
        .unwrap_err();
    let update = grpc
        .update_user(Request::new(UpdateUserRequest {
            user_id: 404,
            name: Some("Ghost".to_string()),
            email: None,
        }))
        .await
        .unwrap_err();
    let delete = grpc
        .delete_user(Request::new(DeleteUserRequest { user_id: 404 }))
        .await
        .unwrap_err();

    assert_eq!(get.code(), Code::NotFound);
    assert_eq!(update.code(), Code::NotFound);
    assert_eq!(delete.code(), Code::NotFound);
}
