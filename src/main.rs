use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing::{error, info};

mod auth;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = match Config::load().and_then(|cfg| cfg.validate().map(|_| cfg)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }
    cfg.log_summary();

    let db = Database::new(cfg.database.path.as_str());
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let addr = match cfg.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let app = AppState {
        db,
        latency: cfg.latency.clone(),
    };
    let server = Server::bind(&addr).max_workers(cfg.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("Server shut down cleanly.");
}
