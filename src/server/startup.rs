use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, error::AppError, service::user::UserService};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info,tower_http=debug`.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects the database pool and runs pending migrations.
///
/// Production uses a pool of 20 max / 5 min connections, development 5 max / 1 min.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and environment
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or to run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let (max_connections, min_connections) = if config.is_production() {
        (20, 5)
    } else {
        (5, 1)
    };

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        "Database ready with a pool of {}-{} connections",
        min_connections,
        max_connections
    );

    Ok(db)
}

/// Creates the bootstrap admin when `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured.
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    match UserService::new(db).seed_admin(seed).await? {
        Some(user) => tracing::info!("Created bootstrap admin {}", user.email),
        None => tracing::debug!("Bootstrap admin {} already exists", seed.email),
    }

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
