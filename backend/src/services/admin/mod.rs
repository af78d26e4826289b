//! # Admin Service Module
//!
//! - `POST /api/admin/clear_all`: deletes every row in every table. The body
//!   must contain `"confirm": true`; `"reset_auto_increment"` (default
//!   `true`) also rewinds the id counters so the next row of each table gets
//!   id 1. There is no undo.

mod clear_all;

pub use clear_all::clear_all;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/clear_all", post().to(clear_all::process))
}
