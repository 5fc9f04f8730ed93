mod config;
mod content;
mod dashboard;
mod db;
mod editor;
mod errors;
mod export;
mod models;
mod owner;
mod persistence;
mod render;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::editor::session::SessionRegistry;
use crate::export::{S3SitePublisher, WkhtmltopdfRenderer};
use crate::persistence::PgDocumentStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumify API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgDocumentStore::new(db));

    // Initialize S3 / MinIO (published portfolio sites)
    let s3 = build_s3_client(&config).await;
    let publisher = Arc::new(S3SitePublisher::new(
        s3,
        config.s3_bucket.clone(),
        config.site_base_url.clone(),
    ));
    info!("Site publisher ready (bucket: {}, base url: {})", config.s3_bucket, config.site_base_url);

    let pdf = Arc::new(WkhtmltopdfRenderer::new(config.pdf_renderer_bin.clone()));
    info!("PDF renderer: {}", config.pdf_renderer_bin);

    let sessions = Arc::new(SessionRegistry::new(Duration::from_secs(
        config.session_idle_secs,
    )));

    let state = AppState {
        store,
        sessions,
        pdf,
        publisher,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "resumify-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
