//! Leaderboard position lookup against the static snapshot.

use actix_web::{get, web, HttpResponse, Responder};

use crate::error::ValidationError;
use crate::http::{error_response, text_response};
use crate::leaderboard;

/// GET /getrank/{position}
#[get("/getrank/{position}")]
pub async fn getrank(path: web::Path<String>) -> impl Responder {
    let position = match path.into_inner().parse::<u32>() {
        Ok(p) if p > 0 => p,
        _ => return error_response(ValidationError::LeaderboardPosition.into()),
    };

    // The snapshot generator only tracks the top 1000.
    if position > 1000 {
        return text_response("Only the top 1000 leaderboard positions are tracked.".into());
    }

    match leaderboard::find_by_position(position) {
        Some(entry) => {
            let line = match (&entry.game_name, &entry.tag_line) {
                (Some(name), Some(tag)) => format!(
                    "{name}#{tag} | Rating: {}RR | Wins: {}",
                    entry.ranked_rating, entry.wins
                ),
                // Players with private profiles appear without identity.
                _ => format!(
                    "Private profile | Rating: {}RR | Wins: {}",
                    entry.ranked_rating, entry.wins
                ),
            };
            text_response(line)
        }
        None => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(format!(
                "Error: Position {position} not found in the leaderboard snapshot."
            )),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(getrank);
}
