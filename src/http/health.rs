//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};

use crate::leaderboard;

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    // Everything is served from memory; the only readiness signal worth
    // reporting is whether the leaderboard snapshot made it in.
    let entries = leaderboard::snapshot().len();
    HttpResponse::Ok().body(format!("ok ({entries} leaderboard entries)"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
