//! Routes for activity types under `/api/kegiatan`.

mod create;
mod list;

pub use create::create_activity;
pub use list::list_activities;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/kegiatan";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
