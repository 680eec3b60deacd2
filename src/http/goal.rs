//! ELO-based custom goal endpoint.

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::error::{ServiceError, ValidationError};
use crate::http::{error_response, text_response};
use crate::ranks;
use crate::session::rr_to_custom_goal;
use crate::upstream::UpstreamClient;

#[derive(Debug, Deserialize)]
pub struct GoalQuery {
    /// Target rank name, e.g. `Gold 2` (case-insensitive).
    pub rank: String,
}

/// GET /goal/{name}/{tag}/{region}?rank={rank}
#[get("/goal/{name}/{tag}/{region}")]
pub async fn custom_goal(
    path: web::Path<(String, String, String)>,
    web::Query(query): web::Query<GoalQuery>,
    client: web::Data<UpstreamClient>,
) -> impl Responder {
    let (name, tag, region) = path.into_inner();
    if !ranks::is_valid_region(&region) {
        return error_response(ValidationError::Region.into());
    }

    let current = match client.fetch_mmr(&name, &tag, &region).await {
        Ok(Some(current)) => current,
        Ok(None) => return error_response(ServiceError::PlayerNotFound),
        Err(err) => return error_response(err.into()),
    };
    let elo = match current.elo {
        Some(elo) => elo,
        None => return error_response(ServiceError::PlayerNotFound),
    };

    match rr_to_custom_goal(elo, &query.rank) {
        Some(goal) if goal.achieved => text_response(format!("{} (ELO {elo})", goal.goal)),
        Some(goal) => text_response(format!("{} ELO to {} (current: {elo})", goal.rr_needed, goal.goal)),
        None => {
            let valid = ranks::RANK_ELO_THRESHOLDS
                .iter()
                .map(|(rank_name, _)| *rank_name)
                .collect::<Vec<_>>()
                .join(", ");
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Error: Unknown rank '{}'. Valid ranks: {valid}", query.rank))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(custom_goal);
}
