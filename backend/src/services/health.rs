//! `GET /api/health`: answers `{"status":"ok"}` when the database responds.

use crate::db::Database;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use common::responses::HealthStatus;
use log::error;

const API_PATH: &str = "/api/health";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(db: web::Data<Database>) -> impl Responder {
    let probe = db
        .run(|conn| Ok(conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?))
        .await;
    match probe {
        Ok(_) => HttpResponse::Ok().json(HealthStatus {
            status: "ok".to_string(),
            detail: None,
        }),
        Err(e) => {
            error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthStatus {
                status: "error".to_string(),
                detail: Some(e.to_string()),
            })
        }
    }
}
