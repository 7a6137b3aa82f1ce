mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::auth::jwt::JwtService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_admin(&db, &config).await?;

    let state = AppState::new(
        db.clone(),
        JwtService::new(&config.jwt_secret),
        config.is_production(),
    );
    let app = router::router(state, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    tracing::info!("Shutting down, closing database connections");
    db.close().await?;

    Ok(())
}
