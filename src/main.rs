use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use std::sync::Arc;

use tagline::config::{config, EnvConfig, CONFIG};
use tagline::db::database_service::DatabaseService;
use tagline::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let env = EnvConfig::from_env();
    CONFIG.set(env.clone()).expect("Config already initialized");
    let addr = format!("0.0.0.0:{}", env.port);

    let db = Arc::new(
        DatabaseService::new(&env.db_url)
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        // Single allow-listed origin, credentialed, so the session cookie
        // survives cross-origin requests from the frontend.
        let cors = Cors::default()
            .allowed_origin(&config().cors_origin)
            .allowed_header(header::CONTENT_TYPE)
            .allow_any_method()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
