use crate::db::{row_exists, Database, TIMESTAMP_FORMAT};
use crate::error::{log_failure, ApiError, ApiResult};
use crate::services::fields;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::{Local, NaiveDate, NaiveDateTime};
use common::model::report::Report;
use common::requests::NewReport;
use log::info;
use rusqlite::{params, Connection};

/// Accepted spellings of `tanggal`, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Handler for `POST /api/laporan`.
pub async fn process(db: web::Data<Database>, payload: web::Json<NewReport>) -> impl Responder {
    let new_report = payload.into_inner();
    let now = Local::now().naive_local();
    match db.run(move |conn| create_report(conn, new_report, now)).await {
        Ok(report) => {
            info!("Created report {} for plant {}", report.id, report.plant_id);
            HttpResponse::Created().json(report)
        }
        Err(e) => {
            log_failure("Creating report failed", &e);
            e.error_response()
        }
    }
}

/// Records a report dated `now` unless the payload carries its own date.
///
/// The three reference checks and the insert run in one transaction, so a
/// missing reference leaves the table untouched.
pub fn create_report(
    conn: &mut Connection,
    new_report: NewReport,
    now: NaiveDateTime,
) -> ApiResult<Report> {
    let plant_id = fields::require_id("id_tanaman", new_report.plant_id)?;
    let staff_id = fields::require_id("id_petugas", new_report.staff_id)?;
    let activity_id = fields::require_id("id_kegiatan", new_report.activity_id)?;
    let date = normalize_date(new_report.date.as_deref(), now)?;
    let content = new_report.content.unwrap_or_default();

    let tx = conn.transaction()?;
    let references = [
        ("tanaman", "id_tanaman", plant_id),
        ("petugas", "id_petugas", staff_id),
        ("kegiatan", "id_kegiatan", activity_id),
    ];
    for (table, column, id) in references {
        if !row_exists(&tx, table, column, id)? {
            return Err(ApiError::missing_reference(column, id));
        }
    }
    tx.execute(
        "INSERT INTO laporan (id_tanaman, id_petugas, id_kegiatan, tanggal, isi_laporan)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![plant_id, staff_id, activity_id, date, content],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Report {
        id,
        plant_id,
        staff_id,
        activity_id,
        date,
        content,
    })
}

/// Brings a client supplied date into the stored `YYYY-MM-DD HH:MM:SS` form.
///
/// A bare date means midnight; a missing or blank value means `now`.
pub fn normalize_date(raw: Option<&str>, now: NaiveDateTime) -> ApiResult<String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(now.format(TIMESTAMP_FORMAT).to_string());
    }

    let parsed = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    match parsed {
        Some(datetime) => Ok(datetime.format(TIMESTAMP_FORMAT).to_string()),
        None => Err(ApiError::Validation(format!(
            "tanggal must look like YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, got {raw:?}"
        ))),
    }
}
