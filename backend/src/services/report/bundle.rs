use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use crate::services::activities::list_activities;
use crate::services::fields;
use crate::services::parks::list_parks;
use crate::services::plants::list_all_plants;
use crate::services::report::renderer::{JsonRenderer, Renderer};
use crate::services::report::DEFAULT_BUNDLE_LIMIT;
use crate::services::reports::list_report_rows;
use crate::services::staff::list_staff;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::bundle::ReportBundle;
use common::requests::LimitQuery;
use rusqlite::Connection;

/// Handler for `GET /api/report/all`.
pub async fn process(db: web::Data<Database>, query: web::Query<LimitQuery>) -> impl Responder {
    let raw_limit = query.limit;
    let result = db
        .run(move |conn| {
            let limit = fields::limit_or(raw_limit, DEFAULT_BUNDLE_LIMIT)?;
            render_report(conn, limit, &JsonRenderer)
        })
        .await;
    match result {
        Ok(bundle) => HttpResponse::Ok().json(bundle),
        Err(e) => {
            log_failure("Assembling report bundle failed", &e);
            e.error_response()
        }
    }
}

/// Reads every list the report needs from a single snapshot.
///
/// Plants come from the unfiltered listing, so no park has to be chosen up
/// front. At most `limit` reports are included, newest first.
pub fn assemble_bundle(conn: &mut Connection, limit: u32) -> ApiResult<ReportBundle> {
    let tx = conn.transaction()?;
    let bundle = ReportBundle {
        parks: list_parks(&tx)?,
        staff: list_staff(&tx)?,
        activities: list_activities(&tx)?,
        plants: list_all_plants(&tx)?,
        reports: list_report_rows(&tx, limit)?,
    };
    tx.commit()?;
    Ok(bundle)
}

pub fn render_report<R: Renderer>(
    conn: &mut Connection,
    limit: u32,
    renderer: &R,
) -> ApiResult<R::Output> {
    assemble_bundle(conn, limit).map(|bundle| renderer.render(bundle))
}
