//! Condition catalog endpoints.
//!
//! - `GET /conditions`: summary of every condition, catalog order
//! - `GET /conditions/:id`: full condition record, weights in catalog order

use axum::extract::{Path, State};
use axum::Json;
use serde::{Serialize, Serializer};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::condition::OrderedWeights;
use crate::models::{Condition, ConditionSeverity, ConditionSummary};

#[derive(Serialize)]
pub struct ConditionsResponse {
    pub conditions: Vec<ConditionSummary>,
}

/// Full condition record as served by the detail endpoint.
pub struct ConditionDetail(pub Condition);

#[derive(Serialize)]
struct DetailView<'a> {
    id: &'a str,
    name: &'a str,
    symptoms: &'a [String],
    weights: OrderedWeights<'a>,
    risk_factors: &'a [String],
    emergency: bool,
    severity: ConditionSeverity,
    prevention: &'a [String],
    recommendations: &'a [String],
}

impl Serialize for ConditionDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = &self.0;
        DetailView {
            id: &c.id,
            name: &c.name,
            symptoms: &c.symptoms,
            weights: c.ordered_weights(),
            risk_factors: &c.risk_factors,
            emergency: c.emergency,
            severity: c.severity,
            prevention: &c.prevention,
            recommendations: &c.recommendations,
        }
        .serialize(serializer)
    }
}

/// `GET /conditions`
pub async fn list(State(ctx): State<ApiContext>) -> Json<ConditionsResponse> {
    let conditions = ctx
        .analyzer
        .knowledge()
        .conditions()
        .iter()
        .map(ConditionSummary::from)
        .collect();

    Json(ConditionsResponse { conditions })
}

/// `GET /conditions/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<ConditionDetail>, ApiError> {
    ctx.analyzer
        .knowledge()
        .condition(&id)
        .cloned()
        .map(|condition| Json(ConditionDetail(condition)))
        .ok_or_else(|| ApiError::NotFound(format!("Condition not found: {id}")))
}
