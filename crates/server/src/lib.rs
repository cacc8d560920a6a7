//! CourseMatch HTTP server
//!
//! Actix-web REST API in front of the recommendation engine.

mod error;
mod keepalive;
pub mod routes;
mod state;
mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use coursematch_common::{AppConfig, Result};
use coursematch_embed::{build_embedder, Embedder};
use coursematch_vector::{default_catalog, RecommendationEngine};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use keepalive::{ping_once, spawn_keepalive};
pub use state::AppState;
pub use types::{ErrorResponse, Recommendation, RecommendRequest, RecommendResponse};

/// Check the embedding backend, then build the engine over the built-in catalog
pub async fn build_engine(config: &AppConfig) -> Result<RecommendationEngine> {
    let embedder = build_embedder(config)?;
    embedder.health_check().await?;
    RecommendationEngine::build(default_catalog(), embedder, config.embed_concurrency).await
}

/// Build the engine, then serve until shutdown.
///
/// The engine is fully built before the listener is bound; a build failure
/// aborts startup.
pub async fn start_server(config: AppConfig) -> Result<()> {
    let engine = build_engine(&config).await?;
    let stats = engine.stats();
    info!(
        "Engine ready - {} items, dimension {}, model {}",
        stats.total_items, stats.dimension, stats.embedding_model
    );

    let keepalive = match &config.keepalive_url {
        Some(url) => Some(spawn_keepalive(
            url.clone(),
            Duration::from_secs(config.keepalive_interval_secs),
        )?),
        None => None,
    };

    let bind_addr = config.server_bind_address();
    let origins = config.cors_origins.clone();
    let state = web::Data::new(Arc::new(AppState::new(config, engine)));

    info!("Server listening on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&origins))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    if let Some(handle) = keepalive {
        handle.abort();
    }

    info!("Server stopped");
    Ok(())
}

/// CORS policy for the configured origins
fn cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}


#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::test;

    #[actix_web::test]
    async fn test_cors_allows_configured_origin() {
        let state = web::Data::new(testing::test_state().await);
        let app = test::init_service(
            App::new()
                .wrap(cors(&["http://localhost:5173".to_string()]))
                .app_data(state)
                .configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/ping")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }

    #[actix_web::test]
    async fn test_build_engine_with_hashing_backend() {
        let engine = build_engine(&testing::test_config()).await.unwrap();
        assert_eq!(engine.stats().total_items, default_catalog().len());
        assert_eq!(engine.stats().dimension, 64);
    }

    #[actix_web::test]
    async fn test_build_engine_fails_fast_without_ollama() {
        let config = AppConfig {
            ollama_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };

        let err = build_engine(&config).await.err().unwrap();
        assert!(
            matches!(err, coursematch_common::CourseMatchError::Network(_)),
            "got {:?}",
            err
        );
    }
}
