//! `POST /analyze`: symptom analysis.
//!
//! Body: `{"symptoms": "<free text>"}`. Results are cached by sanitized
//! input, so repeated requests skip the pipeline until the entry expires.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::validate::validate;
use crate::pipeline::{AnalysisResult, ValidationError};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub timestamp: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Pull the `symptoms` string out of a raw JSON body.
///
/// A missing or unparseable body, or a body without the field, is "no
/// symptoms". A present field that is not a string is an invalid type.
fn extract_symptoms(body: &[u8]) -> Result<String, ApiError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::BadRequest("No symptoms provided".into()))?;

    match payload.get("symptoms") {
        None => Err(ApiError::BadRequest("No symptoms provided".into())),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ValidationError::InvalidType.into()),
    }
}

pub async fn analyze(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let symptoms = extract_symptoms(&body)?;
    tracing::info!(chars = symptoms.chars().count(), "Analysis request");

    let sanitized = validate(&symptoms).map_err(|err| {
        tracing::warn!(error = %err, "Validation failed");
        ApiError::from(err)
    })?;

    let cached = {
        let mut cache = ctx
            .cache
            .lock()
            .map_err(|_| ApiError::Internal("response cache lock".into()))?;
        cache.get(&sanitized)
    };

    let result = match cached {
        Some(result) => {
            tracing::info!("Returning cached result");
            result
        }
        None => {
            let result = ctx.analyzer.analyze_sanitized(&sanitized);
            ctx.cache
                .lock()
                .map_err(|_| ApiError::Internal("response cache lock".into()))?
                .insert(&sanitized, result.clone());
            result
        }
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        timestamp: chrono::Utc::now().to_rfc3339(),
        result,
    }))
}
