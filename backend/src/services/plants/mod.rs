//! # Plant Service Module
//!
//! Plants belong to exactly one park, so creation checks that the park
//! exists first and listing can be narrowed to a single park.
//!
//! - `GET /api/tanaman[?id_taman=N]`: plants of park `N` (newest first), or
//!   every plant when no filter is given.
//! - `POST /api/tanaman`: creates a plant; an unknown `id_taman` is a
//!   referential error and nothing is inserted.
//! - `GET /api/tanaman_all`: every plant, ordered by park then id. Report
//!   builders use this so they never depend on a filter being supplied.

mod create;
mod list;

pub use create::create_plant;
pub use list::{list_all_plants, list_plants};

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/tanaman";
const ALL_API_PATH: &str = "/api/tanaman_all";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}

pub fn configure_all_routes() -> Scope {
    scope(ALL_API_PATH).route("", get().to(list::process_all))
}
