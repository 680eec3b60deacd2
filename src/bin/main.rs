use actix_web::{middleware::Logger, web, App, HttpServer};
use valorank_server::{config, http, leaderboard, metrics, upstream::UpstreamClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::settings();

    // Warm the static leaderboard snapshot; the server still runs without
    // it, the Radiant cutoff just falls back to the static base threshold.
    match leaderboard::load_from_file(&settings.leaderboard_path) {
        Ok(count) => log::info!(
            "loaded {count} leaderboard entries from {}",
            settings.leaderboard_path
        ),
        Err(err) => log::warn!("static leaderboard unavailable: {err:#}"),
    }

    let client = UpstreamClient::from_settings(settings).expect("upstream client");
    let client = web::Data::new(client);

    log::info!("Valorank server listening on {}", settings.server_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(client.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&settings.server_addr)?
    .run()
    .await
}
