use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::activity::Activity;
use rusqlite::Connection;

pub async fn process(db: web::Data<Database>) -> impl Responder {
    match db.run(|conn| list_activities(conn)).await {
        Ok(activities) => HttpResponse::Ok().json(activities),
        Err(e) => {
            log_failure("Listing activities failed", &e);
            e.error_response()
        }
    }
}

pub fn list_activities(conn: &Connection) -> ApiResult<Vec<Activity>> {
    let mut stmt = conn.prepare(
        "SELECT id_kegiatan, jenis_kegiatan
         FROM kegiatan ORDER BY jenis_kegiatan ASC, id_kegiatan ASC",
    )?;
    let activities = stmt.query_map([], |row| {
        Ok(Activity {
            id: row.get(0)?,
            activity_type: row.get(1)?,
        })
    })?;
    Ok(activities.collect::<Result<_, _>>()?)
}
