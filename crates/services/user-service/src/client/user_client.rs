//! gRPC client for user-service.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use common::{AppError, AppResult, GrpcClientConfig};
use domain::{SaveUser, UpdateUser, User, UserId};
use proto::user::{
    user_service_client::UserServiceClient as ProtoUserServiceClient, DeleteUserRequest,
    GetAllUsersRequest, GetUserRequest, SaveUserRequest, UpdateUserRequest,
};

use crate::service::UserService;

/// gRPC client wrapper for user-service.
///
/// Implements the same `UserService` contract as the local manager, so
/// callers can swap one for the other.
#[derive(Clone)]
pub struct UserClient {
    client: ProtoUserServiceClient<Channel>,
}

impl UserClient {
    /// Connect to user-service.
    pub async fn connect(config: &GrpcClientConfig) -> AppResult<Self> {
        debug!("Connecting to user-service at {}", config.endpoint);
        let channel = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| AppError::validation(format!("Invalid endpoint: {}", e)))?
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect()
            .await?;

        Ok(Self {
            client: ProtoUserServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl UserService for UserClient {
    async fn save_user(&self, user: SaveUser) -> AppResult<User> {
        let request = tonic::Request::new(SaveUserRequest {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
        });

        let mut client = self.client.clone();
        let response = client.save_user(request).await.map_err(AppError::from)?;
        proto_to_user(response.into_inner())
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let request = tonic::Request::new(GetAllUsersRequest {});

        let mut client = self.client.clone();
        let response = client.get_all_users(request).await.map_err(AppError::from)?;

        response
            .into_inner()
            .users
            .into_iter()
            .map(proto_to_user)
            .collect()
    }

    async fn update_user(&self, user: UpdateUser) -> AppResult<User> {
        let request = tonic::Request::new(UpdateUserRequest {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
        });

        let mut client = self.client.clone();
        let response = client.update_user(request).await.map_err(AppError::from)?;
        proto_to_user(response.into_inner())
    }

    async fn delete_user(&self, user_id: UserId) -> AppResult<()> {
        let request = tonic::Request::new(DeleteUserRequest { user_id });

        let mut client = self.client.clone();
        client.delete_user(request).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: UserId) -> AppResult<User> {
        let request = tonic::Request::new(GetUserRequest { user_id });

        let mut client = self.client.clone();
        let response = client.get_user_by_id(request).await.map_err(AppError::from)?;
        proto_to_user(response.into_inner())
    }
}

/// Convert proto UserResponse to domain User.
fn proto_to_user(proto: proto::user::UserResponse) -> AppResult<User> {
    let created_at = chrono::DateTime::parse_from_rfc3339(&proto.created_at)
        .map_err(|_| AppError::internal("Invalid created_at from user-service"))?
        .with_timezone(&chrono::Utc);

    let updated_at = chrono::DateTime::parse_from_rfc3339(&proto.updated_at)
        .map_err(|_| AppError::internal("Invalid updated_at from user-service"))?
        .with_timezone(&chrono::Utc);

    Ok(User {
        user_id: proto.user_id,
        name: proto.name,
        email: proto.email,
        created_at,
        updated_at,
    })
}
