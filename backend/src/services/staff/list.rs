use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::staff::Staff;
use rusqlite::Connection;

pub async fn process(db: web::Data<Database>) -> impl Responder {
    match db.run(|conn| list_staff(conn)).await {
        Ok(staff) => HttpResponse::Ok().json(staff),
        Err(e) => {
            log_failure("Listing staff failed", &e);
            e.error_response()
        }
    }
}

pub fn list_staff(conn: &Connection) -> ApiResult<Vec<Staff>> {
    let mut stmt = conn.prepare(
        "SELECT id_petugas, nama_petugas, jabatan
         FROM petugas ORDER BY nama_petugas ASC, id_petugas ASC",
    )?;
    let staff = stmt.query_map([], |row| {
        Ok(Staff {
            id: row.get(0)?,
            name: row.get(1)?,
            role: row.get(2)?,
        })
    })?;
    Ok(staff.collect::<Result<_, _>>()?)
}
