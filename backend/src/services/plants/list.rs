use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::plant::Plant;
use common::requests::PlantFilter;
use rusqlite::{Connection, Row};

const COLUMNS: &str = "id_tanaman, id_taman, nama_umum, nama_ilmiah, jenis";

/// Handler for `GET /api/tanaman`.
pub async fn process(db: web::Data<Database>, filter: web::Query<PlantFilter>) -> impl Responder {
    let park_id = filter.park_id;
    respond(db.run(move |conn| list_plants(conn, park_id)).await)
}

/// Handler for `GET /api/tanaman_all`.
pub async fn process_all(db: web::Data<Database>) -> impl Responder {
    respond(db.run(|conn| list_all_plants(conn)).await)
}

fn respond(result: ApiResult<Vec<Plant>>) -> HttpResponse {
    match result {
        Ok(plants) => HttpResponse::Ok().json(plants),
        Err(e) => {
            log_failure("Listing plants failed", &e);
            e.error_response()
        }
    }
}

/// Plants of one park, newest first. Without a park this is
/// [`list_all_plants`].
pub fn list_plants(conn: &Connection, park_id: Option<i64>) -> ApiResult<Vec<Plant>> {
    let Some(park_id) = park_id else {
        return list_all_plants(conn);
    };
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM tanaman WHERE id_taman = ?1 ORDER BY id_tanaman DESC"
    ))?;
    let plants = stmt.query_map([park_id], plant_from_row)?;
    Ok(plants.collect::<Result<_, _>>()?)
}

pub fn list_all_plants(conn: &Connection) -> ApiResult<Vec<Plant>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM tanaman ORDER BY id_taman ASC, id_tanaman ASC"
    ))?;
    let plants = stmt.query_map([], plant_from_row)?;
    Ok(plants.collect::<Result<_, _>>()?)
}

fn plant_from_row(row: &Row) -> rusqlite::Result<Plant> {
    Ok(Plant {
        id: row.get(0)?,
        park_id: row.get(1)?,
        common_name: row.get(2)?,
        scientific_name: row.get(3)?,
        kind: row.get(4)?,
    })
}
