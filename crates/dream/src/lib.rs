#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Dream processing endpoints
//!
//! `POST /api/process-dream` runs an uploaded recording through
//! transcription, emotion classification and story generation.
//! `GET /api/dreams/{id}` serves previously stored dream records.

mod audio;
mod error;
mod pipeline;
mod request;
mod store;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    routing::{get, post},
};
use dreamweave_config::Config;
use serde_json::value::RawValue;

pub use error::{DreamError, Result};
pub use pipeline::{Pipeline, PipelineBuilder, PipelineSettings};
pub use request::DreamUpload;
pub use store::DreamStore;
pub use types::{DreamRequest, DreamResponse, DreamStatus};

/// Shared state behind the dream endpoints
pub struct DreamService {
    pipeline: Pipeline,
    store: DreamStore,
}

impl DreamService {
    pub fn new(pipeline: Pipeline, store: DreamStore) -> Self {
        Self { pipeline, store }
    }
}

/// Build the dream service from configuration
///
/// Missing provider credentials do not fail startup; see [`Pipeline`].
pub fn build_service(config: &Config) -> Arc<DreamService> {
    if !config.dreams.directory.is_dir() {
        tracing::warn!(
            directory = %config.dreams.directory.display(),
            "dream store directory does not exist, every lookup will return 404"
        );
    }

    Arc::new(DreamService::new(
        Pipeline::builder(config).build(),
        DreamStore::new(config.dreams.directory.clone()),
    ))
}

/// Create the endpoint router for dreams
pub fn endpoint_router() -> Router<Arc<DreamService>> {
    Router::new()
        .route(
            "/api/process-dream",
            post(process_dream).layer(DefaultBodyLimit::max(request::BODY_LIMIT_BYTES)),
        )
        .route("/api/dreams/{id}", get(get_dream))
}

async fn process_dream(
    State(service): State<Arc<DreamService>>,
    DreamUpload(request): DreamUpload,
) -> Result<Json<DreamResponse>> {
    let response = service.pipeline.process(request).await?;

    Ok(Json(response))
}

async fn get_dream(
    State(service): State<Arc<DreamService>>,
    Path(id): Path<String>,
) -> Result<Json<Box<RawValue>>> {
    let dream = service.store.get(&id).await?;

    tracing::debug!(id, "served stored dream");

    Ok(Json(dream))
}
