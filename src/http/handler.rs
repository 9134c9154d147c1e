//! HTTP handlers for the dashboard API

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::expression::ExpressionOverlay;
use crate::kegg::validate_pathway_id;
use crate::pipeline::{AnalysisRequest, NetworkPipeline, PipelineError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NetworkPipeline>,
}

/// Request for building a network
#[derive(Debug, Deserialize)]
pub struct NetworkRequest {
    /// Disease name or pathway id
    pub disease: String,
    pub confidence: Option<u16>,
    pub spacing: Option<f64>,
    /// Raw CSV with `Symbol` and `LogFC` columns
    pub overlay_csv: Option<String>,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn pipeline_error_response(err: PipelineError) -> Response {
    match err {
        PipelineError::DataFetch { .. } => error_response(StatusCode::BAD_GATEWAY, err.to_string()),
        PipelineError::InvalidRequest(_) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
    }
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "diseases": state.pipeline.config().diseases.len(),
    }))
}

/// Handler listing the disease catalog
pub async fn diseases_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.pipeline.config().diseases.clone())
}

/// Handler returning a pathway's parsed gene list
pub async fn genes_handler(
    State(state): State<AppState>,
    Path(pathway_id): Path<String>,
) -> Response {
    if let Err(e) = validate_pathway_id(&pathway_id) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.pipeline.gene_list(&pathway_id).await {
        Ok(genes) => Json(json!({
            "pathway_id": pathway_id,
            "count": genes.len(),
            "genes": genes,
        })).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}

/// Handler building a network report
pub async fn network_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetworkRequest>, JsonRejection>,
) -> Response {
    // Out-of-range or mistyped fields are bad requests, not extractor errors
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let Some(pathway) = state.pipeline.config().resolve_disease(&payload.disease) else {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Unknown disease or pathway: {}", payload.disease),
        );
    };

    // A bad overlay is reported so the client can retry without it
    let overlay = match payload.overlay_csv.as_deref() {
        Some(text) => match ExpressionOverlay::from_csv_str(text) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                warn!("Rejected expression overlay: {}", e);
                return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
            }
        },
        None => None,
    };

    let request = AnalysisRequest {
        pathway,
        confidence: payload.confidence,
        spacing: payload.spacing,
        overlay,
    };

    match state.pipeline.run(&request).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => pipeline_error_response(e),
    }
}
