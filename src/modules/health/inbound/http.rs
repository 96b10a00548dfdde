use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health.report().await;
    if report.is_healthy() {
        (StatusCode::OK, Json(report)).into_response()
    } else {
        tracing::warn!(failing = ?report.error.keys().collect::<Vec<_>>(), "health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, Json(report)).into_response()
    }
}

#[cfg(test)]
mod health_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::health::service::{DEFAULT_PING_TIMEOUT, HealthService};
    use crate::shell::state::AppState;
    use crate::tests::fixtures::health::{FakeIndicator, Probe};

    use super::handle;

    fn app(probe: Probe) -> Router {
        let health = HealthService::new(DEFAULT_PING_TIMEOUT)
            .with_indicator(Arc::new(FakeIndicator::new("database", probe)));
        Router::new()
            .route("/health", get(handle))
            .with_state(AppState {
                health: Arc::new(health),
            })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_when_the_database_is_up() {
        let response = app(Probe::Up)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "status": "ok",
                "info": { "database": { "status": "up" } },
                "error": {},
                "details": { "database": { "status": "up" } }
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_503_when_the_database_is_down() {
        let response = app(Probe::Down("connection refused"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["database"]["message"], "connection refused");
    }
}
