use crate::db::Database;
use crate::error::{log_failure, ApiResult};
use crate::services::fields;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::park::Park;
use common::requests::NewPark;
use log::info;
use rusqlite::{params, Connection};

/// Handler for `POST /api/taman`.
pub async fn process(db: web::Data<Database>, payload: web::Json<NewPark>) -> impl Responder {
    let new_park = payload.into_inner();
    match db.run(move |conn| create_park(conn, new_park)).await {
        Ok(park) => {
            info!("Created park {} ({})", park.id, park.name);
            HttpResponse::Created().json(park)
        }
        Err(e) => {
            log_failure("Creating park failed", &e);
            e.error_response()
        }
    }
}

/// Inserts a park. `nama_taman` is required and must be unique.
pub fn create_park(conn: &Connection, new_park: NewPark) -> ApiResult<Park> {
    let name = fields::require_text("nama_taman", new_park.name)?;
    let location = fields::optional_text(new_park.location);

    conn.execute(
        "INSERT INTO taman (nama_taman, luas_taman, lokasi) VALUES (?1, ?2, ?3)",
        params![name, new_park.area, location],
    )?;

    Ok(Park {
        id: conn.last_insert_rowid(),
        name,
        area: new_park.area,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::parks::list_parks;

    #[test]
    fn created_parks_get_fresh_ids_and_show_up_in_the_listing() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            let zeta = create_park(
                conn,
                NewPark {
                    name: Some("Zeta".into()),
                    area: Some(10),
                    location: None,
                },
            )?;
            let alpha = create_park(
                conn,
                NewPark {
                    name: Some("Alpha".into()),
                    area: None,
                    location: Some(" Zone B ".into()),
                },
            )?;
            assert_ne!(zeta.id, alpha.id);
            assert_eq!(alpha.location.as_deref(), Some("Zone B"));

            let names: Vec<String> = list_parks(conn)?.into_iter().map(|p| p.name).collect();
            assert_eq!(names, vec!["Alpha", "Zeta"]);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn duplicate_name_is_rejected_by_storage() {
        let db = Database::open_in_memory().unwrap();
        let result = db.with_connection(|conn| {
            let park = || NewPark {
                name: Some("Central".into()),
                ..Default::default()
            };
            create_park(conn, park())?;
            create_park(conn, park())
        });
        assert!(matches!(result, Err(ApiError::Storage(_))));
    }
}
