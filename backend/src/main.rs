use actix_web::{middleware, web, App, HttpServer};
use backend::config::Config;
use backend::db::Database;
use backend::static_files::serve_embedded;
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let db = Database::open(&config.database).map_err(io::Error::other)?;

    info!(
        "Server running at http://{}:{} (allowed origins: {})",
        config.host,
        config.port,
        config.allowed_origins.join(", ")
    );

    let bind_address = config.bind_address();
    HttpServer::new(move || {
        App::new()
            .wrap(backend::cors(&config))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(db.clone()))
            .configure(backend::configure_api(config.json_limit))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind_address)?
    .run()
    .await
}
