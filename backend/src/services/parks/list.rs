use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::park::Park;
use rusqlite::{Connection, Row};

/// Handler for `GET /api/taman`.
pub async fn process(db: web::Data<Database>) -> impl Responder {
    match db.run(|conn| list_parks(conn)).await {
        Ok(parks) => HttpResponse::Ok().json(parks),
        Err(e) => {
            log_failure("Listing parks failed", &e);
            e.error_response()
        }
    }
}

pub fn list_parks(conn: &Connection) -> ApiResult<Vec<Park>> {
    let mut stmt = conn.prepare(
        "SELECT id_taman, nama_taman, luas_taman, lokasi
         FROM taman ORDER BY nama_taman ASC, id_taman ASC",
    )?;
    let parks = stmt.query_map([], park_from_row)?;
    Ok(parks.collect::<Result<_, _>>()?)
}

fn park_from_row(row: &Row) -> rusqlite::Result<Park> {
    Ok(Park {
        id: row.get(0)?,
        name: row.get(1)?,
        area: row.get(2)?,
        location: row.get(3)?,
    })
}
