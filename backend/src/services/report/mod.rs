//! # Report Service Module
//!
//! Builds the printable park-maintenance report. One aggregation
//! ([`bundle::assemble_bundle`]) gathers every list plus the joined reports;
//! a [`renderer::Renderer`] then decides what the client receives.
//!
//! - `GET /api/report/all[?limit=N]`: the bundle as JSON, for pages that
//!   render the document themselves.
//! - `GET /api/report/html[?limit=N]`: a complete, self-contained HTML
//!   document ready to print.
//!
//! `limit` caps the number of reports (default 100000). Empty tables never
//! make either call fail.

mod bundle;
mod html;
mod renderer;

pub use bundle::{assemble_bundle, render_report};
pub use html::HtmlRenderer;
pub use renderer::{JsonRenderer, Renderer};

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/report";

pub const DEFAULT_BUNDLE_LIMIT: u32 = 100_000;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/all", get().to(bundle::process))
        .route("/html", get().to(html::process))
}
