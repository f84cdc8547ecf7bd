use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Field, Multipart, MultipartRejection},
        State,
    },
    routing::post,
    Json, Router,
};
use chrono::Utc;
use grip_core::ledger::{parse_ledger_file, Ledger};
use grip_core::opportunity::OpportunityAnalysis;
use serde_json::Value;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(serde::Serialize)]
struct InvestorOpportunityResponse {
    timestamp: String,
    #[serde(flatten)]
    analysis: OpportunityAnalysis,
    llm_investment_advice: Value,
}

/// Run the full opportunity pipeline over the uploaded ledgers, then ask
/// the model for an investment recommendation over the computed numbers.
async fn investor_opportunity(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<InvestorOpportunityResponse>> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let mut profile_text: Option<String> = None;
    let mut transactions: Option<Ledger> = None;
    let mut payments: Option<Ledger> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "profile_text" => {
                profile_text = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read profile_text: {}", e))
                })?);
            }
            "transactions_file" => {
                transactions = Some(read_ledger_part(field, "transactions_file").await?);
            }
            "payments_file" => {
                payments = Some(read_ledger_part(field, "payments_file").await?);
            }
            _ => {}
        }
    }

    let profile_text = profile_text.ok_or_else(|| {
        ApiError::BadRequest("Missing profile_text in multipart request".to_string())
    })?;
    let transactions = transactions.ok_or_else(|| {
        ApiError::BadRequest("Missing transactions_file in multipart request".to_string())
    })?;

    let analysis = state
        .opportunity_service
        .analyze(&transactions, payments.as_ref())?;
    let advice = state.advisor.advise(&profile_text, &analysis).await?;

    Ok(Json(InvestorOpportunityResponse {
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        analysis,
        llm_investment_advice: advice,
    }))
}

/// Read one uploaded file part and parse it by its filename extension.
async fn read_ledger_part(field: Field<'_>, part: &str) -> Result<Ledger, ApiError> {
    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing filename for {}", part)))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", part, e)))?;
    Ok(parse_ledger_file(&filename, &bytes)?)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/investor_opportunity", post(investor_opportunity))
}
