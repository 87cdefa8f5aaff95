use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and otherwise logs at `info`, with SQL statement logging
/// kept at `warn` to avoid drowning request logs.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,sea_orm=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Creates the database directory if it does not exist yet.
///
/// # Arguments
/// - `config` - Application configuration containing the database directory
///
/// # Returns
/// - `Ok(())` - Directory exists (created now or already present)
/// - `Err(AppError::IoErr)` - Directory could not be created
pub fn prepare_database_dir(config: &Config) -> Result<(), AppError> {
    if !config.database_dir.exists() {
        tracing::info!(
            "Creating database directory {}",
            config.database_dir.display()
        );
        std::fs::create_dir_all(&config.database_dir)?;
    }

    Ok(())
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database file derived from configuration,
/// creating the file if it is missing, then runs all pending SeaORM migrations so every
/// table exists before the server or bot touches it.
///
/// # Arguments
/// - `config` - Application configuration containing the database location
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready at {}", config.database_path().display());

    Ok(db)
}
