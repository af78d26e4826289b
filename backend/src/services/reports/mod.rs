//! # Maintenance Report Service Module
//!
//! Routes under `/api/laporan`.
//!
//! - `GET ""`: the most recent reports (default 20, `?limit=` to change),
//!   each joined with its plant, staff, activity and park names.
//! - `POST ""`: records a report. All three references must exist.

mod create;
mod list;

pub use create::{create_report, normalize_date};
pub use list::list_report_rows;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/laporan";

/// Reports returned by `GET /api/laporan` when no limit is given.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
