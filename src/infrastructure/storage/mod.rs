use crate::core::errors::DevConnectorError;
use crate::core::models::user::User;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Persists `user`, failing with `UserAlreadyExists` if the email is taken.
    async fn insert_user(&self, user: User) -> Result<User, DevConnectorError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DevConnectorError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DevConnectorError>;
    async fn count_users(&self) -> Result<usize, DevConnectorError>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for Arc<T> {
    async fn insert_user(&self, user: User) -> Result<User, DevConnectorError> {
        (**self).insert_user(user).await
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DevConnectorError> {
        (**self).get_user(user_id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DevConnectorError> {
        (**self).get_user_by_email(email).await
    }

    async fn count_users(&self) -> Result<usize, DevConnectorError> {
        (**self).count_users().await
    }
}

pub mod in_memory;
