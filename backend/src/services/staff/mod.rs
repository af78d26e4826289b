//! Routes for the maintenance crew under `/api/petugas`.

mod create;
mod list;

pub use create::create_staff;
pub use list::list_staff;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/petugas";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
