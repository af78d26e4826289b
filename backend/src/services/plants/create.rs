use crate::db::{row_exists, Database};
use crate::error::{log_failure, ApiError, ApiResult};
use crate::services::fields;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::plant::Plant;
use common::requests::NewPlant;
use log::info;
use rusqlite::{params, Connection};

/// Handler for `POST /api/tanaman`.
pub async fn process(db: web::Data<Database>, payload: web::Json<NewPlant>) -> impl Responder {
    let new_plant = payload.into_inner();
    match db.run(move |conn| create_plant(conn, new_plant)).await {
        Ok(plant) => {
            info!("Created plant {} in park {}", plant.id, plant.park_id);
            HttpResponse::Created().json(plant)
        }
        Err(e) => {
            log_failure("Creating plant failed", &e);
            e.error_response()
        }
    }
}

/// Inserts a plant after checking its park exists. The check and the insert
/// share one transaction.
pub fn create_plant(conn: &mut Connection, new_plant: NewPlant) -> ApiResult<Plant> {
    let park_id = fields::require_id("id_taman", new_plant.park_id)?;
    let common_name = fields::require_text("nama_umum", new_plant.common_name)?;
    let scientific_name = fields::optional_text(new_plant.scientific_name);
    let kind = fields::optional_text(new_plant.kind);

    let tx = conn.transaction()?;
    if !row_exists(&tx, "taman", "id_taman", park_id)? {
        return Err(ApiError::missing_reference("id_taman", park_id));
    }
    tx.execute(
        "INSERT INTO tanaman (id_taman, nama_umum, nama_ilmiah, jenis) VALUES (?1, ?2, ?3, ?4)",
        params![park_id, common_name, scientific_name, kind],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Plant {
        id,
        park_id,
        common_name: Some(common_name),
        scientific_name,
        kind,
    })
}
