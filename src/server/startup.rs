use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, query::catalog::Catalog, service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before any request is served.
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

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is created on first start. Sessions expire after seven days without
/// activity.
///
/// # Returns
/// - `Ok(SessionManagerLayer<SqliteStore>)` - Layer to install on the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds and validates the query catalog.
///
/// # Returns
/// - `Ok(Catalog)` - Every sort column maps to a declared relation or column
/// - `Err(AppError::CatalogErr)` - A descriptor is inconsistent; startup must abort
pub fn build_catalog() -> Result<Catalog, AppError> {
    let catalog = Catalog::build()?;
    tracing::info!("Query catalog validated");

    Ok(catalog)
}

/// Provisions the primary superuser from configuration if none exists yet.
///
/// Does nothing when no primary user credentials are configured.
pub async fn ensure_primary_user(
    db: &DatabaseConnection,
    catalog: &Catalog,
    config: &Config,
) -> Result<(), AppError> {
    let Some(primary) = &config.primary_user else {
        tracing::debug!("No primary user configured");
        return Ok(());
    };

    match UserService::new(db, catalog).ensure_primary(primary).await? {
        Some(user) => tracing::info!(id = user.id, username = %user.username, "Created primary user"),
        None => tracing::debug!("Primary user already exists"),
    }

    Ok(())
}
