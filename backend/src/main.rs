mod config;
mod credentials;
mod error;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::FlightStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded single page app. Unknown paths get `index.html` so the
/// client can render them.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load().map_err(std::io::Error::other)?;
    env_logger::init_from_env(Env::default().default_filter_or(config.log.as_str()));

    let store = FlightStore::from_config(&config).map_err(std::io::Error::other)?;
    let url = config.url();
    let bind_address = config.bind_address();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let app_state = AppState::new(store, config);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(web::Data::new(app_state.clone()))
            .service(services::flights::configure_routes())
            .service(services::debug::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind_address)?
        .run()
        .await
}
