use actix_web::{get, HttpResponse};
use tracing::debug;

/// Liveness probe, also the keep-alive target
#[get("/api/ping")]
pub async fn ping() -> HttpResponse {
    debug!("Ping received");

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ping")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_ping() {
        let app = test::init_service(App::new().service(ping)).await;
        let req = test::TestRequest::get().uri("/api/ping").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        assert_eq!(body, "ping");
    }
}
