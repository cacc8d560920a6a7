use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use coursematch_common::CourseMatchError;
use std::fmt;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// HTTP wrapper around [`CourseMatchError`]
#[derive(Debug)]
pub struct ApiError(pub CourseMatchError);

impl From<CourseMatchError> for ApiError {
    fn from(err: CourseMatchError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}
