use crate::auth::jwt::{Claims, JwtService};
use crate::core::avatar::{AvatarOptions, gravatar_url};
use crate::core::errors::DevConnectorError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use tracing::{debug, info};

pub struct UserService<S: Storage> {
    storage: S,
    jwt_service: JwtService,
    avatar_options: AvatarOptions,
    password_cost: u32,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S, jwt_service: JwtService, password_cost: u32) -> Self {
        UserService {
            storage,
            jwt_service,
            avatar_options: AvatarOptions::default(),
            password_cost,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, DevConnectorError> {
        self.jwt_service.validate_token(token)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, DevConnectorError> {
        self.storage.get_user(user_id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DevConnectorError> {
        self.storage.get_user_by_email(email).await
    }

    /// Registers a new account and returns a signed session token for it.
    pub async fn register(&self, new_user: NewUser) -> Result<String, DevConnectorError> {
        new_user.check()?;
        let NewUser { name, email, password } = new_user;

        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(DevConnectorError::UserAlreadyExists(email));
        }

        let avatar = gravatar_url(&email, &self.avatar_options);
        let mut user = User::new(name, email, avatar, password);
        user.password = self.hash_password(std::mem::take(&mut user.password)).await?;

        // The insert is the authoritative uniqueness check; a concurrent
        // registration may have won since the lookup above.
        let user = self.storage.insert_user(user).await?;
        debug!(user_id = %user.id, "user persisted");

        let token = self.jwt_service.generate_token(&user.id)?;
        info!(user_id = %user.id, "user registered");
        Ok(token)
    }

    async fn hash_password(&self, password: String) -> Result<String, DevConnectorError> {
        let cost = self.password_cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }
}
