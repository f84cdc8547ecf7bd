use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(serde::Deserialize)]
struct ExtractClauseRequest {
    clause_type: String,
}

#[derive(serde::Serialize)]
struct ExtractClauseResponse {
    clause: String,
}

/// Extract the requested clause from the preloaded contract, verbatim.
/// A clause the model cannot find comes back as its literal
/// "Clause not found" answer, not as an error.
async fn extract_clause(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ExtractClauseRequest>, JsonRejection>,
) -> ApiResult<Json<ExtractClauseResponse>> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let clause = state
        .clause_extractor
        .extract_clause(&body.clause_type)
        .await?;
    Ok(Json(ExtractClauseResponse { clause }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/extract_clause", post(extract_clause))
}
