//! Account registration, credential checks and API key issuance.
//!
//! Session handling is left to the controller; this service only decides who the caller is.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{api_key::ApiKeyRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        api_key::ApiKey,
        user::{CreateUserParams, LoginParams, RegisterUserParams, User, UserRole},
    },
    util::{
        api_key::generate_api_key,
        password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with the `USER` role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::AuthErr(EmailTaken))` - The email already belongs to an account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                role: UserRole::User,
            })
            .await
            .map_err(|e| match e.sql_err() {
                // Lost a race with a concurrent registration of the same email
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::from(AuthError::EmailTaken),
                _ => AppError::from(e),
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords fail identically.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            tracing::warn!("Login attempt for unknown email {}", params.email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            tracing::warn!("Failed login for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Generates and stores a new API key for `user_id`.
    pub async fn issue_api_key(&self, user_id: i32) -> Result<ApiKey, AppError> {
        let api_key_repo = ApiKeyRepository::new(self.db);

        let api_key = api_key_repo.create(user_id, generate_api_key()).await?;

        tracing::info!("Issued API key {} to user {}", api_key.id, user_id);

        Ok(api_key)
    }

    /// Grants the `ADMIN` role to the account with `email`, if it exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Account promoted (or already admin)
    /// - `Ok(false)` - No account with that email
    pub async fn promote_admin(&self, email: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        let promoted = user_repo
            .set_role_by_email(&email.trim().to_lowercase(), UserRole::Admin)
            .await?;

        Ok(promoted)
    }
}
