//! HTTP surface: one file per route group, mounted in [`routes`].

pub mod getrank;
pub mod goal;
pub mod health;
pub mod rank;
pub mod routes;
pub mod wl;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::error::ServiceError;

/// Shared plain-text error mapping: caller mistakes are 400, unknown players
/// 404, upstream trouble 502. Upstream failures are the only ones worth an
/// error-level log line.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::PlayerNotFound => StatusCode::NOT_FOUND,
        ServiceError::Upstream(upstream) => {
            log::error!("upstream failure: {upstream}");
            StatusCode::BAD_GATEWAY
        }
    };
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(format!("Error: {err}"))
}

pub(crate) fn text_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}
