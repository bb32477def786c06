//! PCOS Assess HTTP server.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pcos_assess::adapters::fetch::{HttpArtifactFetcher, HttpFetcherConfig};
use pcos_assess::adapters::http::{assessment_router, AssessmentAppState};
use pcos_assess::adapters::models::{JsonPipelineLoader, ModelRegistry, ModelSources, OnnxModelLoader};
use pcos_assess::adapters::storage::FileResultStore;
use pcos_assess::config::{AppConfig, ConfigError, ValidationError};
use pcos_assess::domain::foundation::AssessmentError;
use pcos_assess::domain::imaging::ConfidenceThreshold;
use pcos_assess::ports::ProvisioningError;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(ConfigError::ValidationFailed(err))
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let fetcher = HttpArtifactFetcher::new(HttpFetcherConfig::from(&config.models))?;
    let registry = ModelRegistry::new(
        ModelSources::from(&config.models),
        Arc::new(JsonPipelineLoader),
        Arc::new(OnnxModelLoader::new(config.models.image_resolution)),
        Arc::new(fetcher),
    );

    let result_store = FileResultStore::new(&config.assessment.export_dir);
    info!(export_dir = %result_store.export_dir().display(), "Reports will be saved locally");

    let state = AssessmentAppState {
        models: Arc::new(registry),
        result_store: Arc::new(result_store),
        default_threshold: ConfidenceThreshold::new(config.assessment.default_threshold)?,
        image_side: config.models.image_resolution,
        max_image_bytes: config.assessment.max_image_bytes,
    };

    let app = assessment_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "PCOS Assess listening");

    axum::serve(listener, app).await?;
    Ok(())
}
