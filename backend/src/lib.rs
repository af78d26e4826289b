//! City park maintenance records: parks, staff, activity types, plants and
//! maintenance reports over a small REST API, plus a printable report.

pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod static_files;

use crate::config::Config;
use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;

/// Registers every API route together with the extractor configuration they
/// rely on. Malformed JSON bodies and query strings surface as validation
/// errors in the usual `{"error": ...}` shape.
pub fn configure_api(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .content_type_required(false)
                .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
        )
        .service(services::health::configure_routes())
        .service(services::parks::configure_routes())
        .service(services::staff::configure_routes())
        .service(services::activities::configure_routes())
        .service(services::plants::configure_all_routes())
        .service(services::plants::configure_routes())
        .service(services::reports::configure_routes())
        .service(services::report::configure_routes())
        .service(services::admin::configure_routes());
    }
}

/// Cross-origin policy: only the configured page origins may call the API.
pub fn cors(config: &Config) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
