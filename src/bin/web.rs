//! Single binary web server: bracket edges and graph via a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! BRACKET_TTL_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_web::{App, HttpServer};
use fixture_graph::{web, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = web::new_state();

    // Background task: periodically remove brackets that have been idle too long
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    let period = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(period);
        loop {
            interval.tick().await;
            let removed = web::purge_idle(&state_cleanup, timeout);
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive bracket(s) (no activity for {}h)",
                    removed,
                    timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
