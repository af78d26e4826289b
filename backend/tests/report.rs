mod support;

use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::test;
use support::{app, create, fresh_db, get, seed_example};
use serde_json::json;

#[actix_web::test]
async fn bundle_of_an_empty_database_is_five_empty_lists() {
    let app = test::init_service(app(fresh_db())).await;
    let (status, bundle) = get(&app, "/api/report/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        bundle,
        json!({"taman": [], "petugas": [], "kegiatan": [], "tanaman": [], "laporan": []})
    );
}

#[actix_web::test]
async fn master_lists_are_present_without_any_report() {
    let app = test::init_service(app(fresh_db())).await;
    create(&app, "/api/taman", json!({"nama_taman": "Central"})).await;
    create(&app, "/api/petugas", json!({"nama_petugas": "Ana"})).await;

    let (_, bundle) = get(&app, "/api/report/all").await;
    assert_eq!(bundle["taman"].as_array().unwrap().len(), 1);
    assert_eq!(bundle["petugas"][0]["nama_petugas"], "Ana");
    assert_eq!(bundle["laporan"], json!([]));
}

#[actix_web::test]
async fn bundle_carries_denormalized_report_rows() {
    let app = test::init_service(app(fresh_db())).await;
    seed_example(&app).await;

    let (_, bundle) = get(&app, "/api/report/all").await;
    assert_eq!(bundle["tanaman"][0]["nama_ilmiah"], "Quercus");
    let row = &bundle["laporan"][0];
    assert_eq!(row["taman"], "Central");
    assert_eq!(row["tanaman"], "Oak");
    assert_eq!(row["petugas"], "Ana");
    assert_eq!(row["kegiatan"], "Watering");
    assert_eq!(row["isi_laporan"], "Watered");
    assert_eq!(row["tanggal"], "2024-01-01 00:00:00");
}

#[actix_web::test]
async fn bundle_limit_caps_reports_only() {
    let app = test::init_service(app(fresh_db())).await;
    seed_example(&app).await;
    create(
        &app,
        "/api/laporan",
        json!({"id_tanaman": 1, "id_petugas": 1, "id_kegiatan": 1, "tanggal": "2024-06-01"}),
    )
    .await;

    let (_, bundle) = get(&app, "/api/report/all?limit=1").await;
    let reports = bundle["laporan"].as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["tanggal"], "2024-06-01 00:00:00");
    assert_eq!(bundle["taman"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn blank_bundle_limit_includes_every_report() {
    let app = test::init_service(app(fresh_db())).await;
    seed_example(&app).await;
    create(
        &app,
        "/api/laporan",
        json!({"id_tanaman": 1, "id_petugas": 1, "id_kegiatan": 1, "tanggal": "2024-06-01"}),
    )
    .await;

    let (status, bundle) = get(&app, "/api/report/all?limit=").await;
    assert_eq!(status, StatusCode::OK, "{bundle}");
    assert_eq!(bundle["laporan"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/report/html?limit=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let (status, body) = get(&app, "/api/report/all?limit=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn html_report_of_an_empty_database_has_no_data_cells() {
    let app = test::init_service(app(fresh_db())).await;
    let req = test::TestRequest::get().uri("/api/report/html").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert_eq!(html.matches("<table>").count(), 5);
    assert_eq!(html.matches("<td").count(), 0);
}

#[actix_web::test]
async fn html_report_lists_the_example_walkthrough() {
    let app = test::init_service(app(fresh_db())).await;
    seed_example(&app).await;

    let req = test::TestRequest::get().uri("/api/report/html").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    for expected in ["Central", "Oak", "Quercus", "Ana", "Gardener", "Watering", "Watered"] {
        assert!(html.contains(expected), "missing {expected}");
    }
}

#[actix_web::test]
async fn html_escapes_stored_markup() {
    let app = test::init_service(app(fresh_db())).await;
    create(&app, "/api/taman", json!({"nama_taman": "<b>Bold</b> & Co"})).await;

    let req = test::TestRequest::get().uri("/api/report/html").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("&lt;b&gt;Bold"));
    assert!(html.contains("&amp; Co"));
    assert!(!html.contains("<b>Bold</b>"));
}
