use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use crate::services::fields;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::activity::Activity;
use common::requests::NewActivity;
use log::info;
use rusqlite::Connection;

pub async fn process(db: web::Data<Database>, payload: web::Json<NewActivity>) -> impl Responder {
    let new_activity = payload.into_inner();
    match db.run(move |conn| create_activity(conn, new_activity)).await {
        Ok(activity) => {
            info!("Created activity type {}", activity.id);
            HttpResponse::Created().json(activity)
        }
        Err(e) => {
            log_failure("Creating activity type failed", &e);
            e.error_response()
        }
    }
}

pub fn create_activity(conn: &Connection, new_activity: NewActivity) -> ApiResult<Activity> {
    let activity_type = fields::require_text("jenis_kegiatan", new_activity.activity_type)?;

    conn.execute(
        "INSERT INTO kegiatan (jenis_kegiatan) VALUES (?1)",
        [&activity_type],
    )?;

    Ok(Activity {
        id: conn.last_insert_rowid(),
        activity_type,
    })
}
