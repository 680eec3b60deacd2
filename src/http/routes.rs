use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module at the root scope.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::rank::init_routes)
        .configure(http::wl::init_routes)
        .configure(http::goal::init_routes)
        .configure(http::getrank::init_routes)
        .configure(http::health::init_routes);
}
