use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, auth::ServerState};
use service::auth::{repo::seaorm::SeaOrmAuthRepository, repository::AuthRepository, service::AuthConfig, AuthService};
use service::seller::{SeaOrmSellerRepository, SellerRepository, SellerService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(err = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Wire the SeaORM repositories into the services shared by all handlers.
pub fn build_state(db: DatabaseConnection, cfg: &configs::AuthConfig) -> ServerState {
    let auth_repo: Arc<dyn AuthRepository> = Arc::new(SeaOrmAuthRepository { db: db.clone() });
    let seller_repo: Arc<dyn SellerRepository> = Arc::new(SeaOrmSellerRepository { db });
    ServerState {
        auth: Arc::new(AuthService::new(auth_repo, AuthConfig::from(cfg))),
        sellers: Arc::new(SellerService::new(seller_repo)),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    init_logging(cfg.logging.format);

    // DB pool, schema and seed data
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await.map_err(anyhow::Error::from)?;

    let state = build_state(db, &cfg.auth);
    if let (Some(account), Some(password)) = (&cfg.auth.master_account, &cfg.auth.master_password) {
        let created = state.auth.ensure_master(account, password).await?;
        info!(%account, created, "master account ready");
    }

    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = cfg.server.bind_addr().parse().map_err(anyhow::Error::from)?;
    info!(%addr, "starting seller api server");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
