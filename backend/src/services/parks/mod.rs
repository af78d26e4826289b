//! # Park Service Module
//!
//! Routes for the park master data under `/api/taman`.
//!
//! - `GET ""`: every park, ordered by name.
//! - `POST ""`: creates a park from a `NewPark` body and answers `201` with
//!   the stored row, including its new `id_taman`.

mod create;
mod list;

pub use create::create_park;
pub use list::list_parks;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/taman";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
