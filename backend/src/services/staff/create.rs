use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use crate::services::fields;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::staff::Staff;
use common::requests::NewStaff;
use log::info;
use rusqlite::{params, Connection};

pub async fn process(db: web::Data<Database>, payload: web::Json<NewStaff>) -> impl Responder {
    let new_staff = payload.into_inner();
    match db.run(move |conn| create_staff(conn, new_staff)).await {
        Ok(staff) => {
            info!("Created staff member {}", staff.id);
            HttpResponse::Created().json(staff)
        }
        Err(e) => {
            log_failure("Creating staff member failed", &e);
            e.error_response()
        }
    }
}

pub fn create_staff(conn: &Connection, new_staff: NewStaff) -> ApiResult<Staff> {
    let name = fields::require_text("nama_petugas", new_staff.name)?;
    let role = fields::optional_text(new_staff.role);

    conn.execute(
        "INSERT INTO petugas (nama_petugas, jabatan) VALUES (?1, ?2)",
        params![name, role],
    )?;

    Ok(Staff {
        id: conn.last_insert_rowid(),
        name,
        role,
    })
}
