//! HTTP surface of DownTrack.
//!
//! Every resource lives under `/api/<Resource>/<Action>`, with the action
//! spelled as a literal segment (`POST`, `PUT`, `DELETE`, `GET`, `GET_ALL`,
//! `GetPaged`, ...). Single records are addressed by an id in the query
//! string, e.g. `GET /api/Section/GET?sectionId=1`.

use axum::{Json, Router, extract::State, routing::get};
use downtrack_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tokio::{net::TcpListener, signal::ctrl_c};
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod config;
pub mod controller;
pub mod error;
pub mod extract;

pub use config::Config;
use error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

pub fn app(conn: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/Section", controller::section::router())
        .nest("/api/Department", controller::department::router())
        .nest("/api/Employee", controller::employee::router())
        .nest("/api/Equipment", controller::equipment::router())
        .nest("/api/DoneMaintenance", controller::maintenance::router())
        .nest("/api/Evaluation", controller::evaluation::router())
        .nest("/api/TransferRequest", controller::transfer_request::router())
        .nest("/api/Transfer", controller::transfer::router())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { conn })
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .sqlx_logging(config.db_sqlx_logging);

    info!("Connecting to database...");
    let conn = Database::connect(options).await?;
    if config.run_migrations {
        info!("Applying pending migrations...");
        Migrator::up(&conn, None).await?;
    }

    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(conn))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .conn
        .ping()
        .await
        .map_err(|e| ApiError::from(downtrack::ServiceError::Db(e)))?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install terminate handler: {e}");
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
}
