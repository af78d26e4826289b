use crate::db::schema::TABLES_IN_DELETE_ORDER;
use crate::db::Database;
use crate::error::{log_failure, ApiError, ApiResult};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ClearAllRequest;
use common::responses::ClearAllResponse;
use log::info;
use rusqlite::Connection;

/// Handler for `POST /api/admin/clear_all`.
///
/// The body is read leniently: an empty or malformed body is treated as `{}`
/// and therefore refused for lack of confirmation.
pub async fn process(db: web::Data<Database>, body: web::Bytes) -> impl Responder {
    let request: ClearAllRequest = serde_json::from_slice(&body).unwrap_or_default();
    match db.run(move |conn| clear_all(conn, &request)).await {
        Ok(response) => {
            info!(
                "Cleared all tables (counters reset: {})",
                response.reset_auto_increment
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log_failure("Clearing all tables failed", &e);
            e.error_response()
        }
    }
}

/// Empties every table, children first, in a single transaction: either all
/// tables end up empty or none is touched.
pub fn clear_all(conn: &mut Connection, request: &ClearAllRequest) -> ApiResult<ClearAllResponse> {
    if !request.confirm {
        return Err(ApiError::ConfirmationRequired);
    }

    let tx = conn.transaction()?;
    for table in TABLES_IN_DELETE_ORDER {
        tx.execute(&format!("DELETE FROM {table}"), [])?;
    }
    if request.reset_auto_increment {
        let mut stmt = tx.prepare("DELETE FROM sqlite_sequence WHERE name = ?1")?;
        for table in TABLES_IN_DELETE_ORDER {
            stmt.execute([table])?;
        }
    }
    tx.commit()?;

    Ok(ClearAllResponse {
        status: "ok".to_string(),
        cleared: TABLES_IN_DELETE_ORDER.iter().map(|t| t.to_string()).collect(),
        reset_auto_increment: request.reset_auto_increment,
    })
}
