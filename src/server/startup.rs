use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{cookie::Key, cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::AuthService,
};

const SESSION_COOKIE_NAME: &str = "token";

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `info` with sqlx query logging limited to warnings.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,sqlx=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Creates the session store on the application's connection pool and makes sure its
/// table exists.
pub async fn connect_to_session_store(db: &DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(session_store)
}

/// Wraps `router` with the signed session cookie layer.
///
/// The cookie is HTTP-only, `SameSite=Strict` and expires after one day of inactivity.
/// The `Secure` flag is dropped only when `APP_ENV=development`.
pub fn apply_session_layer(router: Router, store: SqliteStore, config: &Config) -> Router {
    let key = Key::from(config.session_secret.as_bytes());

    let session_layer = SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_http_only(true)
        .with_same_site(SameSite::Strict)
        .with_secure(!config.is_development())
        .with_expiry(Expiry::OnInactivity(time::Duration::days(1)))
        .with_signed(key);

    router.layer(session_layer)
}

/// Adds request tracing and CORS restricted to `BASE_URL` with credentials allowed.
pub fn apply_http_layers(router: Router, config: &Config) -> Result<Router, AppError> {
    let origin: HeaderValue =
        config
            .base_url
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BASE_URL".to_string(),
                reason: "not a valid origin".to_string(),
            })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Ok(router.layer(TraceLayer::new_for_http()).layer(cors))
}

/// Promotes `ADMIN_EMAIL` to the admin role when configured.
///
/// A configured email without a matching account is logged and otherwise ignored so the
/// first administrator can register and be promoted on the next restart.
pub async fn promote_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(email) = config.admin_email.as_deref() else {
        return Ok(());
    };

    if AuthService::new(db).promote_admin(email).await? {
        tracing::info!("Granted admin role to {}", email);
    } else {
        tracing::warn!("ADMIN_EMAIL {} does not match any registered user", email);
    }

    Ok(())
}
