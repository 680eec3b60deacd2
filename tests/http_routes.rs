//! Route-level tests for the endpoints served entirely from process memory.
//! The upstream-backed routes need a live API key and are exercised manually.

use actix_web::{test, App};

use valorank_server::http;
use valorank_server::leaderboard::{self, LeaderboardEntry};

fn entry(position: u32, rating: i32, wins: u32, name: Option<&str>, tag: Option<&str>) -> LeaderboardEntry {
    LeaderboardEntry {
        position,
        ranked_rating: rating,
        wins,
        game_name: name.map(str::to_string),
        tag_line: tag.map(str::to_string),
        puuid: None,
    }
}

#[actix_rt::test]
async fn getrank_formats_public_and_private_entries() {
    leaderboard::replace(vec![
        entry(1, 1023, 312, Some("ace"), Some("EUW")),
        entry(2, 990, 250, None, None),
    ]);
    let app = test::init_service(App::new().configure(http::getrank::init_routes)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/getrank/1").to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ace#EUW | Rating: 1023RR | Wins: 312");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/getrank/2").to_request(),
    )
    .await;
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Private profile | Rating: 990RR | Wins: 250");
}

#[actix_rt::test]
async fn getrank_rejects_invalid_positions() {
    let app = test::init_service(App::new().configure(http::getrank::init_routes)).await;

    for uri in ["/getrank/0", "/getrank/-3", "/getrank/abc"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri} should be rejected");
    }
}

#[actix_rt::test]
async fn getrank_beyond_tracked_range_explains_itself() {
    let app = test::init_service(App::new().configure(http::getrank::init_routes)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/getrank/1500").to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Only the top 1000 leaderboard positions are tracked.");
}

#[actix_rt::test]
async fn getrank_missing_position_is_404() {
    // Position 900 is absent whether or not another test has loaded its
    // two-entry snapshot by now.
    let app = test::init_service(App::new().configure(http::getrank::init_routes)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/getrank/900").to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_rt::test]
async fn healthz_reports_ok() {
    let app = test::init_service(App::new().configure(http::health::init_routes)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/healthz").to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"ok ("));
}
