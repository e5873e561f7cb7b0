//! User domain models and parameters.
//!
//! Provides the account model with its role, plus the validated parameter types for
//! registration and login.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, LoginUserDto, RegisterUserDto, UserDto},
    server::{error::AppError, util::validation::Validator},
};

/// Access level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Stored and serialized form: `USER` or `ADMIN`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses the stored form. Anything other than `ADMIN` is a regular user.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "ADMIN" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// Registered account.
///
/// Carries the password hash so the auth service can verify logins; the hash never
/// leaves the server since neither DTO conversion includes it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role: UserRole::from_stored(&entity.role),
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user to the public identity DTO used by register and profile.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts the user to the reduced identity returned by login.
    pub fn into_login_dto(self) -> LoginUserDto {
        LoginUserDto {
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    /// Trimmed and lowercased.
    pub email: String,
    /// Plain text, hashed by the auth service before storage.
    pub password: String,
}

impl RegisterUserParams {
    /// Validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Every field present and non-blank, email plausible
    /// - `Err(AppError::Validation)` - One entry per invalid field
    pub fn try_from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let name = v.required_text("name", dto.name);
        let email = v.required_text("email", dto.email);
        if let Some(email) = &email {
            v.check(email.contains('@'), "email must be a valid email address");
        }
        let password = v.required("password", dto.password);
        if let Some(password) = &password {
            v.check(!password.is_empty(), "password must not be empty");
        }

        v.finish()?;

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => Ok(Self {
                name,
                email: email.to_lowercase(),
                password,
            }),
            _ => Err(AppError::InternalError(
                "Registration validation passed with missing fields".to_string(),
            )),
        }
    }
}

/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginParams {
    /// Trimmed and lowercased.
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn try_from_dto(dto: LoginDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let email = v.required_text("email", dto.email);
        let password = v.required("password", dto.password);
        if let Some(password) = &password {
            v.check(!password.is_empty(), "password must not be empty");
        }

        v.finish()?;

        match (email, password) {
            (Some(email), Some(password)) => Ok(Self {
                email: email.to_lowercase(),
                password,
            }),
            _ => Err(AppError::InternalError(
                "Login validation passed with missing fields".to_string(),
            )),
        }
    }
}

/// Row to insert for a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
