use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use crate::services::fields;
use crate::services::reports::DEFAULT_LIST_LIMIT;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::report::{Report, ReportRow};
use common::requests::LimitQuery;
use rusqlite::{Connection, Row};

/// Handler for `GET /api/laporan`.
pub async fn process(db: web::Data<Database>, query: web::Query<LimitQuery>) -> impl Responder {
    let raw_limit = query.limit;
    let result = db
        .run(move |conn| {
            let limit = fields::limit_or(raw_limit, DEFAULT_LIST_LIMIT)?;
            list_report_rows(conn, limit)
        })
        .await;
    match result {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log_failure("Listing reports failed", &e);
            e.error_response()
        }
    }
}

/// Newest reports first, joined with the names of what they reference.
///
/// Left joins keep a report in the result even when a name cannot be
/// resolved.
pub fn list_report_rows(conn: &Connection, limit: u32) -> ApiResult<Vec<ReportRow>> {
    let mut stmt = conn.prepare(
        "SELECT l.id_laporan, l.id_tanaman, l.id_petugas, l.id_kegiatan,
                l.tanggal, COALESCE(l.isi_laporan, ''),
                t.id_taman, t.nama_umum, p.nama_petugas, k.jenis_kegiatan, tm.nama_taman
         FROM laporan l
         LEFT JOIN tanaman  t  ON t.id_tanaman  = l.id_tanaman
         LEFT JOIN petugas  p  ON p.id_petugas  = l.id_petugas
         LEFT JOIN kegiatan k  ON k.id_kegiatan = l.id_kegiatan
         LEFT JOIN taman    tm ON tm.id_taman   = t.id_taman
         ORDER BY l.tanggal DESC, l.id_laporan DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([i64::from(limit)], report_row_from_row)?;
    Ok(rows.collect::<Result<_, _>>()?)
}

fn report_row_from_row(row: &Row) -> rusqlite::Result<ReportRow> {
    Ok(ReportRow {
        report: Report {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            staff_id: row.get(2)?,
            activity_id: row.get(3)?,
            date: row.get(4)?,
            content: row.get(5)?,
        },
        park_id: row.get(6)?,
        plant_name: row.get(7)?,
        staff_name: row.get(8)?,
        activity_type: row.get(9)?,
        park_name: row.get(10)?,
    })
}
