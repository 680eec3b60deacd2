//! Current-rank endpoint with caller-supplied text templating.

use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::error::{ServiceError, ValidationError};
use crate::http::{error_response, text_response};
use crate::ranks;
use crate::session::rr_to_next_goal;
use crate::upstream::UpstreamClient;

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    #[serde(default = "default_template")]
    pub text: String,
}

fn default_template() -> String {
    "{rank} ({rr} RR) | {rrToGoal} RR to {goal}".into()
}

/// GET /rank/{name}/{tag}/{region}?text={template}
///
/// Placeholders: `{name} {tag} {rank} {rr} {rrToGoal} {goal}`.
#[get("/rank/{name}/{tag}/{region}")]
pub async fn rank(
    path: web::Path<(String, String, String)>,
    web::Query(query): web::Query<RankQuery>,
    client: web::Data<UpstreamClient>,
) -> impl Responder {
    let (name, tag, region) = path.into_inner();
    match rank_line(&client, &name, &tag, &region, &query.text).await {
        Ok(line) => text_response(line),
        Err(err) => error_response(err),
    }
}

async fn rank_line(
    client: &UpstreamClient,
    name: &str,
    tag: &str,
    region: &str,
    template: &str,
) -> Result<String, ServiceError> {
    if !ranks::is_valid_region(region) {
        return Err(ValidationError::Region.into());
    }

    let (mmr, leaderboard) = tokio::join!(
        client.fetch_mmr(name, tag, region),
        client.fetch_leaderboard(region),
    );

    let current = mmr?.ok_or(ServiceError::PlayerNotFound)?;

    // A missing leaderboard degrades the Radiant cutoff to the static base
    // threshold instead of failing the whole request.
    let leaderboard = match leaderboard {
        Ok(entries) => Some(entries),
        Err(err) => {
            log::warn!("leaderboard unavailable, using static threshold: {err}");
            None
        }
    };

    let tier = current.currenttier.unwrap_or(0);
    let rr = current.ranking_in_tier.unwrap_or(0);
    let goal = rr_to_next_goal(tier, rr, leaderboard.as_deref());

    Ok(template
        .replace("{name}", name)
        .replace("{tag}", tag)
        .replace("{rank}", ranks::tier_name(tier).unwrap_or("Unknown"))
        .replace("{rr}", &rr.to_string())
        .replace("{rrToGoal}", &goal.rr_needed.to_string())
        .replace("{goal}", &goal.goal))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(rank);
}
