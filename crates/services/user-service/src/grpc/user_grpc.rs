//! gRPC implementation for UserService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::UserService;
use domain::{SaveUser, UpdateUser};
use proto::user::{
    user_service_server::UserService as UserServiceProto, DeleteUserRequest, DeleteUserResponse,
    GetAllUsersRequest, GetUserRequest, ListUsersResponse, SaveUserRequest, UpdateUserRequest,
    UserResponse,
};

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn save_user(
        &self,
        request: Request<SaveUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .save_user(SaveUser {
                user_id: req.user_id,
                name: req.name,
                email: req.email,
            })
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn get_all_users(
        &self,
        _request: Request<GetAllUsersRequest>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let users = self.service.get_all_users().await.map_err(Status::from)?;
        let total = i32::try_from(users.len())
            .map_err(|_| Status::out_of_range("Too many users to report a total"))?;
        let users: Vec<UserResponse> = users.iter().map(user_to_proto).collect();

        Ok(Response::new(ListUsersResponse { users, total }))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .update_user(UpdateUser {
                user_id: req.user_id,
                name: req.name,
                email: req.email,
            })
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let req = request.into_inner();

        self.service
            .delete_user(req.user_id)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(DeleteUserResponse { success: true }))
    }

    async fn get_user_by_id(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .get_user_by_id(req.user_id)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }
}

/// Convert domain User to proto UserResponse.
fn user_to_proto(user: &domain::User) -> UserResponse {
    UserResponse {
        user_id: user.user_id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}
