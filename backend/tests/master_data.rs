mod support;

use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::config::Config;
use backend::{configure_api, cors};
use support::{app, create, fresh_db, get, post, send};
use serde_json::json;

#[actix_web::test]
async fn created_park_is_returned_whole_and_listed() {
    let app = test::init_service(app(fresh_db())).await;

    let park = create(
        &app,
        "/api/taman",
        json!({"nama_taman": "Central", "luas_taman": 1000, "lokasi": "Zone A"}),
    )
    .await;
    assert_eq!(
        park,
        json!({"id_taman": 1, "nama_taman": "Central", "luas_taman": 1000, "lokasi": "Zone A"})
    );

    let second = create(&app, "/api/taman", json!({"nama_taman": "Alun-Alun"})).await;
    assert_eq!(second["id_taman"], 2);
    assert_eq!(second["luas_taman"], json!(null));

    let (status, parks) = get(&app, "/api/taman").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = parks
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nama_taman"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alun-Alun", "Central"]);
}

#[actix_web::test]
async fn numeric_strings_are_coerced() {
    let app = test::init_service(app(fresh_db())).await;
    let park = create(
        &app,
        "/api/taman",
        json!({"nama_taman": "Central", "luas_taman": "1500"}),
    )
    .await;
    assert_eq!(park["luas_taman"], 1500);
}

#[actix_web::test]
async fn missing_required_fields_are_validation_errors() {
    let app = test::init_service(app(fresh_db())).await;

    let (status, body) = post(&app, "/api/taman", json!({"lokasi": "Zone A"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "nama_taman is required"}));

    let (status, body) = post(&app, "/api/petugas", json!({"nama_petugas": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "nama_petugas is required"}));

    let (status, body) = post(&app, "/api/kegiatan", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "jenis_kegiatan is required"}));

    let (_, parks) = get(&app, "/api/taman").await;
    assert_eq!(parks, json!([]));
}

#[actix_web::test]
async fn malformed_bodies_use_the_error_shape() {
    let app = test::init_service(app(fresh_db())).await;

    let req = test::TestRequest::post()
        .uri("/api/taman")
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = post(&app, "/api/taman", json!({"nama_taman": "X", "luas_taman": "big"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("numeric"), "{body}");
}

#[actix_web::test]
async fn body_without_content_type_is_still_read() {
    let app = test::init_service(app(fresh_db())).await;
    let req = test::TestRequest::post()
        .uri("/api/kegiatan")
        .set_payload(r#"{"jenis_kegiatan":"Pemangkasan"}"#)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["jenis_kegiatan"], "Pemangkasan");
}

#[actix_web::test]
async fn staff_and_activities_round_out_master_data() {
    let app = test::init_service(app(fresh_db())).await;

    let ana = create(
        &app,
        "/api/petugas",
        json!({"nama_petugas": "Ana", "jabatan": "Gardener"}),
    )
    .await;
    let budi = create(&app, "/api/petugas", json!({"nama_petugas": "Budi"})).await;
    assert_ne!(ana["id_petugas"], budi["id_petugas"]);
    assert_eq!(budi["jabatan"], json!(null));

    let watering = create(&app, "/api/kegiatan", json!({"jenis_kegiatan": "Watering"})).await;
    assert_eq!(watering, json!({"id_kegiatan": 1, "jenis_kegiatan": "Watering"}));

    let (_, staff) = get(&app, "/api/petugas").await;
    assert_eq!(staff.as_array().unwrap().len(), 2);
    let (_, activities) = get(&app, "/api/kegiatan").await;
    assert_eq!(activities, json!([watering]));
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(app(fresh_db())).await;
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn cors_only_answers_allowed_origins() {
    let config = Config::default();
    let app = test::init_service(
        App::new()
            .wrap(cors(&config))
            .app_data(web::Data::new(fresh_db()))
            .configure(configure_api(config.json_limit)),
    )
    .await;

    let allowed = test::TestRequest::get()
        .uri("/api/taman")
        .insert_header((header::ORIGIN, "http://localhost:8081"))
        .to_request();
    let resp = test::call_service(&app, allowed).await;
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:8081"))
    );

    let foreign = test::TestRequest::get()
        .uri("/api/taman")
        .insert_header((header::ORIGIN, "http://evil.example"))
        .to_request();
    let resp = test::call_service(&app, foreign).await;
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
