use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;

/// Catalog and index statistics
#[get("/catalog/stats")]
pub async fn catalog_stats(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.engine.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_state;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_catalog_stats() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(catalog_stats),
        )
        .await;

        let req = test::TestRequest::get().uri("/catalog/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_items"], 3);
        assert_eq!(body["dimension"], 64);
        assert_eq!(body["embedding_model"], "hashing-64");
    }
}
