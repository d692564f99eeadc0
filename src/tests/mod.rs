mod api_tests;

use crate::auth::jwt::JwtService;
use crate::core::constants::MIN_BCRYPT_COST;
use crate::core::errors::DevConnectorError;
use crate::core::models::user::User;
use crate::core::services::UserService;
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use async_trait::async_trait;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_TTL_SECS: u64 = 360_000;

pub fn create_test_service() -> (Arc<UserService<Arc<dyn Storage>>>, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let shared: Arc<dyn Storage> = Arc::new(storage.clone());
    (service_over(shared), storage)
}

pub fn service_over(storage: Arc<dyn Storage>) -> Arc<UserService<Arc<dyn Storage>>> {
    let jwt_service = JwtService::new(TEST_SECRET.to_string(), TEST_TTL_SECS);
    Arc::new(UserService::new(storage, jwt_service, MIN_BCRYPT_COST))
}

/// Storage whose writes always fail, for exercising the server-error path.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn insert_user(&self, _user: User) -> Result<User, DevConnectorError> {
        Err(DevConnectorError::StorageError("connection refused".to_string()))
    }

    async fn get_user(&self, _user_id: &str) -> Result<Option<User>, DevConnectorError> {
        Ok(None)
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, DevConnectorError> {
        Ok(None)
    }

    async fn count_users(&self) -> Result<usize, DevConnectorError> {
        Ok(0)
    }
}

/// Storage whose lookups fail before any write is attempted.
pub struct FailingLookupStorage;

#[async_trait]
impl Storage for FailingLookupStorage {
    async fn insert_user(&self, user: User) -> Result<User, DevConnectorError> {
        Ok(user)
    }

    async fn get_user(&self, _user_id: &str) -> Result<Option<User>, DevConnectorError> {
        Err(DevConnectorError::StorageError("read timed out".to_string()))
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, DevConnectorError> {
        Err(DevConnectorError::StorageError("read timed out".to_string()))
    }

    async fn count_users(&self) -> Result<usize, DevConnectorError> {
        Ok(0)
    }
}
