use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    state::AppState,
};

/// Name of the cookie carrying the session ID.
const SESSION_COOKIE_NAME: &str = "board.sid";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured log level applies
/// to every target.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
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

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite pool as application data. The session
/// table is created if it does not exist yet.
///
/// # Arguments
/// - `db` - Connected application database
/// - `config` - Application configuration with cookie and expiry settings
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    // TODO: spawn a periodic task deleting expired rows from the session table.
    let layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.session_secure_cookie)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_inactivity_days,
        )));

    Ok(layer)
}

/// Builds the CORS layer when an allowed origin is configured.
///
/// Credentials are allowed so browsers send the session cookie cross-origin.
///
/// # Returns
/// - `Ok(None)` - No origin configured, CORS stays disabled
/// - `Ok(Some(CorsLayer))` - Layer permitting the configured origin
/// - `Err(AppError::ConfigErr)` - Origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = config.cors_allowed_origin.as_ref() else {
        return Ok(None);
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ALLOWED_ORIGIN".to_string(),
            value: origin.clone(),
        })?;

    let layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Some(layer))
}

/// Assembles the application router with state and middleware layers.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session` - Session layer from `connect_to_session`
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Router)` - Router ready to be served
/// - `Err(AppError::ConfigErr)` - Invalid CORS configuration
pub fn build_app(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
    config: &Config,
) -> Result<Router, AppError> {
    let mut app = router::router()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(config)? {
        app = app.layer(cors);
    }

    Ok(app)
}
