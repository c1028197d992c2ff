mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);
    info!("Backend API at {}", config.backend_api_uri);

    let frontend_config = web::Data::new(config.frontend());

    HttpServer::new(move || {
        App::new()
            .app_data(frontend_config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
