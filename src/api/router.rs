//! HTTP router.
//!
//! Middleware stack (outermost → innermost):
//! 1. Security headers → 2. Access logger → 3. Rate limiter (`/analyze` only)

use axum::http::header::{CACHE_CONTROL, X_CONTENT_TYPE_OPTIONS};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the service router.
///
/// Middleware uses `Extension<ApiContext>` (injected outside every
/// middleware). Endpoint handlers use `State<ApiContext>`.
pub fn api_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let catalog = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/conditions", get(endpoints::conditions::list))
        .route("/conditions/:id", get(endpoints::conditions::detail))
        .with_state(ctx.clone());

    let analysis = Router::new()
        .route("/analyze", post(endpoints::analyze::analyze))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::rate::limit));

    Router::new()
        .merge(catalog)
        .merge(analysis)
        .fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::Extension(ctx))
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::knowledge::KnowledgeBase;

    fn test_ctx(config: &ServerConfig) -> ApiContext {
        ApiContext::new(Arc::new(KnowledgeBase::builtin().unwrap()), config)
    }

    fn test_app() -> Router {
        api_router(test_ctx(&ServerConfig::default()))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn analyze_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // =================================================================
    // HEALTH & HEADERS
    // =================================================================

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = test_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], crate::config::APP_VERSION);
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn security_headers_on_every_response() {
        for uri in ["/health", "/conditions", "/nowhere"] {
            let response = test_app().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(
                response.headers().get("X-Content-Type-Options").unwrap(),
                "nosniff",
                "{uri}"
            );
            assert_eq!(
                response.headers().get("Cache-Control").unwrap(),
                "no-store",
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let response = test_app().oneshot(get_request("/nonexistent")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Resource not found");
    }

    // =================================================================
    // ANALYZE
    // =================================================================

    #[tokio::test]
    async fn analyze_chest_pain_flags_critical_emergency() {
        let response = test_app()
            .oneshot(analyze_request(r#"{"symptoms": "I have chest pain and sweating"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert!(json["timestamp"].is_string());
        assert_eq!(
            json["input_analysis"]["extracted_symptoms"],
            serde_json::json!(["chest pain", "sweating"])
        );
        assert_eq!(json["input_analysis"]["emergency_detected"], true);
        assert_eq!(json["input_analysis"]["emergency_level"], "critical");
        assert_eq!(json["risk_assessment"][0]["condition_id"], "heart_attack");
        assert_eq!(json["risk_assessment"][0]["is_emergency"], true);
        assert!(json["risk_assessment"].as_array().unwrap().len() <= 5);
        assert_eq!(json["disclaimer"], crate::pipeline::DISCLAIMER);
    }

    #[tokio::test]
    async fn analyze_without_symptoms_is_400() {
        for body in ["", "{}", r#"{"text": "fever"}"#] {
            let response = test_app().oneshot(analyze_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            let json = body_json(response).await;
            assert_eq!(json["error"]["message"], "No symptoms provided");
        }
    }

    #[tokio::test]
    async fn analyze_validation_failures_are_400() {
        let cases = [
            (r#"{"symptoms": 12}"#, "Invalid input type"),
            (r#"{"symptoms": ""}"#, "Invalid input type"),
            (r#"{"symptoms": "hi"}"#, "Input too short. Minimum 3 characters required."),
            (
                r#"{"symptoms": "<script>alert(1)</script>"}"#,
                "Invalid characters detected in input.",
            ),
        ];
        for (body, message) in cases {
            let response = test_app().oneshot(analyze_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
            let json = body_json(response).await;
            assert_eq!(json["error"]["message"], message, "{body}");
        }
    }

    #[tokio::test]
    async fn analyze_too_long_is_400() {
        let body = serde_json::json!({ "symptoms": "a".repeat(501) }).to_string();
        let response = test_app().oneshot(analyze_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Input too long. Maximum 500 characters allowed."
        );
    }

    #[tokio::test]
    async fn repeated_analysis_served_from_cache() {
        let ctx = test_ctx(&ServerConfig::default());
        let body = r#"{"symptoms": "runny nose and sneezing"}"#;

        let first = api_router(ctx.clone())
            .oneshot(analyze_request(body))
            .await
            .unwrap();
        let first = body_json(first).await;
        assert_eq!(ctx.cache.lock().unwrap().len(), 1);

        let second = api_router(ctx.clone())
            .oneshot(analyze_request(body))
            .await
            .unwrap();
        let second = body_json(second).await;
        assert_eq!(ctx.cache.lock().unwrap().len(), 1);

        assert_eq!(first["risk_assessment"], second["risk_assessment"]);
        assert_eq!(first["insight"], second["insight"]);
        assert_eq!(first["risk_assessment"][0]["condition_id"], "common_cold");
        assert_eq!(first["input_analysis"]["emergency_detected"], false);
    }

    #[tokio::test]
    async fn analyze_rate_limited_after_quota() {
        let config = ServerConfig {
            rate_limit: 2,
            rate_window: Duration::from_secs(60),
            ..ServerConfig::default()
        };
        let ctx = test_ctx(&config);
        let body = r#"{"symptoms": "fever and cough"}"#;

        for _ in 0..2 {
            let response = api_router(ctx.clone())
                .oneshot(analyze_request(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = api_router(ctx.clone())
            .oneshot(analyze_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["Retry-After"], "60");
        // Outer layers still wrap the rejected request
        assert_eq!(response.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "RATE_LIMITED");
    }

    #[tokio::test]
    async fn rate_limit_does_not_cover_catalog_routes() {
        let config = ServerConfig {
            rate_limit: 1,
            ..ServerConfig::default()
        };
        let ctx = test_ctx(&config);
        for _ in 0..3 {
            let response = api_router(ctx.clone())
                .oneshot(get_request("/health"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    // =================================================================
    // CONDITIONS
    // =================================================================

    #[tokio::test]
    async fn conditions_listed_in_catalog_order() {
        let response = test_app().oneshot(get_request("/conditions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let conditions = json["conditions"].as_array().unwrap();
        assert_eq!(conditions.len(), 15);
        assert_eq!(conditions[0]["id"], "heart_attack");
        assert_eq!(conditions[0]["name"], "Heart Attack");
        assert_eq!(conditions[0]["emergency"], true);
        assert!(conditions[0]["severity"].is_string());
        assert!(conditions[0].get("symptoms").is_none());
    }

    #[tokio::test]
    async fn condition_detail_returns_full_record() {
        let response = test_app()
            .oneshot(get_request("/conditions/heart_attack"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["id"], "heart_attack");
        assert_eq!(json["weights"]["chest pain"], 10);
        assert!(json["recommendations"].as_array().is_some_and(|r| !r.is_empty()));
    }

    #[tokio::test]
    async fn condition_detail_weights_keep_catalog_order() {
        let response = test_app()
            .oneshot(get_request("/conditions/heart_attack"))
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        let weights = &text[text.find("\"weights\"").unwrap()..];
        let weights = &weights[..weights.find('}').unwrap()];
        assert!(weights.starts_with(r#""weights":{"chest pain":10,"chest tightness":10,"#));
        assert!(weights.ends_with(r#""arm pain":8,"jaw pain":7"#));
    }

    #[tokio::test]
    async fn unknown_condition_is_404() {
        let response = test_app()
            .oneshot(get_request("/conditions/dragon_pox"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
