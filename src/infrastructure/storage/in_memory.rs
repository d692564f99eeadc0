use crate::core::errors::DevConnectorError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct UserTables {
    users: HashMap<String, User>,
    ids_by_email: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<RwLock<UserTables>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert_user(&self, user: User) -> Result<User, DevConnectorError> {
        // Both indexes live behind one lock so the uniqueness check and the write are atomic.
        let mut tables = self.tables.write().await;
        if tables.ids_by_email.contains_key(&user.email) {
            return Err(DevConnectorError::UserAlreadyExists(user.email));
        }
        if tables.users.contains_key(&user.id) {
            return Err(DevConnectorError::StorageError(format!("Duplicate user id {}", user.id)));
        }
        tables.ids_by_email.insert(user.email.clone(), user.id.clone());
        tables.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, DevConnectorError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DevConnectorError> {
        let tables = self.tables.read().await;
        Ok(tables
            .ids_by_email
            .get(email)
            .and_then(|id| tables.users.get(id).cloned()))
    }

    async fn count_users(&self) -> Result<usize, DevConnectorError> {
        Ok(self.tables.read().await.users.len())
    }
}
