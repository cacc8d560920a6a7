use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{RecommendRequest, RecommendResponse};

/// Recommend programs for free-text interests
#[post("/recommend")]
pub async fn recommend(
    req: web::Json<RecommendRequest>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    // oversized k is clamped, never rejected
    let k = req
        .k
        .unwrap_or(state.config.default_top_k)
        .min(state.config.max_top_k);

    info!("Recommendation request (k={}, text length={})", k, req.text.len());

    let result = state.engine.recommend(&req.text, k).await?;

    Ok(HttpResponse::Ok().json(RecommendResponse::from(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure;
    use crate::testing::test_state;
    use crate::types::ErrorResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state().await))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_recommend_exact_match_first() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "text": "Bachelor of Science in Data Science. Statistics and machine learning.", "k": 2 }))
            .to_request();

        let body: RecommendResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.recommendations.len(), 2);
        assert_eq!(body.recommendations[0].title, "Bachelor of Science in Data Science");
        assert_eq!(body.recommendations[0].score, 1.0);
        assert!(body.recommendations[0].score >= body.recommendations[1].score);
    }

    #[actix_web::test]
    async fn test_recommend_default_k() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "text": "painting and sculpture" }))
            .to_request();

        let body: RecommendResponse = test::call_and_read_body_json(&app, req).await;
        // default k is 2 in the test config, catalog has 3 items
        assert_eq!(body.recommendations.len(), 2);
    }

    #[actix_web::test]
    async fn test_recommend_k_clamped_to_catalog() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "text": "engineering", "k": 10 }))
            .to_request();

        let body: RecommendResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.recommendations.len(), 3);
    }

    #[actix_web::test]
    async fn test_recommend_k_above_max_is_clamped() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "text": "engineering", "k": 11 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: RecommendResponse = test::read_body_json(resp).await;
        assert_eq!(body.recommendations.len(), 3);
    }

    #[actix_web::test]
    async fn test_recommend_rejects_bad_requests() {
        let app = app!();

        let cases = [
            json!({ "text": "art", "k": 0 }),
            json!({ "text": "art", "k": -1 }),
            json!({ "k": 3 }),
        ];

        for body in cases {
            let req = test::TestRequest::post()
                .uri("/recommend")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);

            let err: ErrorResponse = test::read_body_json(resp).await;
            assert!(!err.error.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_recommend_unembeddable_query() {
        let app = app!();

        // no alphanumeric tokens -> zero vector from the hashing embedder
        for text in ["?!", "", "   "] {
            let req = test::TestRequest::post()
                .uri("/recommend")
                .set_json(json!({ "text": text }))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "text: {:?}", text);
            let err: ErrorResponse = test::read_body_json(resp).await;
            assert!(err.error.starts_with("Embedding error"), "got {}", err.error);
        }
    }
}
