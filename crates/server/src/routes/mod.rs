use actix_web::web;
use coursematch_common::CourseMatchError;

use crate::error::ApiError;

pub mod catalog;
pub mod recommend;
pub mod system;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(CourseMatchError::invalid_input(err.to_string())).into()
    }))
    .service(recommend::recommend)
    .service(system::ping)
    .service(catalog::catalog_stats);
}
