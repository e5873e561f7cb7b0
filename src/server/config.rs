use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const MIN_SESSION_SECRET_LEN: usize = 64;

pub struct Config {
    pub database_url: String,

    /// Signs the session cookie, at least 64 bytes.
    pub session_secret: String,

    /// Origin allowed by CORS.
    pub base_url: String,
    pub port: u16,

    /// `development` turns off the `Secure` cookie flag.
    pub app_env: String,

    /// Existing user promoted to ADMIN at startup.
    pub admin_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_LEN),
            }
            .into());
        }

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a valid port", port),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            session_secret,
            base_url: required("BASE_URL")?,
            port,
            app_env: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),
            admin_email: lookup("ADMIN_EMAIL").filter(|email| !email.trim().is_empty()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }
}
