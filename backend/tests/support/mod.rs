#![allow(dead_code)]

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::config::DEFAULT_JSON_LIMIT;
use backend::configure_api;
use backend::db::Database;
use backend::static_files::serve_embedded;
use serde_json::{json, Value};

/// The application as `main.rs` assembles it, minus CORS and request logging.
pub fn app(
    db: Database,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(db))
        .configure(configure_api(DEFAULT_JSON_LIMIT))
        .default_service(web::route().to(serve_embedded))
}

pub fn fresh_db() -> Database {
    Database::open_in_memory().expect("in-memory database")
}

/// Sends `req` and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, value)
}

pub async fn get<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post<S, B>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(
        app,
        test::TestRequest::post().uri(uri).set_json(body).to_request(),
    )
    .await
}

/// Posts `body` and insists on `201 Created`.
pub async fn create<S, B>(app: &S, uri: &str, body: Value) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, value) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} answered {value}");
    value
}

/// Creates one row of every kind, mirroring the documented walkthrough.
pub async fn seed_example<S, B>(app: &S)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    create(
        app,
        "/api/taman",
        json!({"nama_taman": "Central", "luas_taman": 1000, "lokasi": "Zone A"}),
    )
    .await;
    create(
        app,
        "/api/tanaman",
        json!({"nama_umum": "Oak", "nama_ilmiah": "Quercus", "id_taman": 1}),
    )
    .await;
    create(
        app,
        "/api/petugas",
        json!({"nama_petugas": "Ana", "jabatan": "Gardener"}),
    )
    .await;
    create(app, "/api/kegiatan", json!({"jenis_kegiatan": "Watering"})).await;
    create(
        app,
        "/api/laporan",
        json!({
            "id_tanaman": 1,
            "id_petugas": 1,
            "id_kegiatan": 1,
            "tanggal": "2024-01-01",
            "isi_laporan": "Watered"
        }),
    )
    .await;
}
