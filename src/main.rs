use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_governor::governor::middleware::NoOpMiddleware;
use actix_web::middleware::{Condition, Logger, NormalizePath};
use actix_web::{App, HttpResponse, HttpServer, Responder, get};
use anyhow::{Context, anyhow};
use dotenvy::dotenv;
use serde_json::json;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod service;
mod store;

use config::Config;
use db::{ensure_schema, init_db};
use service::Services;
use service::dashboard::SystemClock;
use store::{MySqlStore, Store};

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "HRMS Lite API is running",
        "docs": "/swagger-ui/"
    }))
}

/// Per-IP limiter shared by all workers; `None` when limiting is switched off.
fn build_limiter(
    requests_per_min: u32,
) -> anyhow::Result<Option<Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>>> {
    if requests_per_min == 0 {
        return Ok(None);
    }
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} per minute"))?;
    Ok(Some(Arc::new(Governor::new(&cfg))))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections).await?;
    ensure_schema(&pool).await?;

    let store: Arc<dyn Store> = Arc::new(MySqlStore::new(pool));
    let services = Services::new(store, Arc::new(SystemClock));

    let limiter = build_limiter(config.rate_api_per_min)?;

    info!(addr = %config.server_addr, rate_api_per_min = config.rate_api_per_min, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::from_option(limiter.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .service(index)
            .configure(|cfg| routes::configure(cfg, &services))
    })
    .bind(&config.server_addr)
    .with_context(|| format!("Failed to bind {}", config.server_addr))?
    .run()
    .await?;

    Ok(())
}
