//! Server-side rendering of the printable report.
//!
//! The layout is fixed so every printout looks the same regardless of the
//! data: each section is one table with a narrow numbering column, columns
//! share the remaining width equally (`table-layout: fixed`), and sections
//! are separated by the same number of blank rows. Styling is inlined so the
//! document prints correctly when saved and opened on its own.

use crate::db::Database;
use crate::error::log_failure;
use crate::services::fields;
use crate::services::report::bundle::render_report;
use crate::services::report::renderer::Renderer;
use crate::services::report::DEFAULT_BUNDLE_LIMIT;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::{Local, NaiveDate};
use common::model::bundle::ReportBundle;
use common::model::report::ReportRow;
use common::requests::LimitQuery;
use std::collections::HashMap;

const TITLE: &str = "Laporan Kegiatan Penataan Taman Kota";
const FOOTER: &str = "Sumber: Sistem Informasi Perawatan Taman Kota";
const PRINT_DATE_FORMAT: &str = "%d %B %Y";
const MISSING: &str = "-";

/// Blank rows emitted between two consecutive sections.
pub const SECTION_GAP_ROWS: usize = 2;

const STYLE: &str = "\
body{font-family:Inter, Arial, sans-serif; color:#111827; margin:24px}
h1{margin:0 0 8px; font-size:22px}
h2{margin:0 0 8px; font-size:16px}
.header{display:flex; justify-content:space-between; align-items:flex-end; margin-bottom:16px}
.muted{color:#374151; font-size:12px}
table{width:100%; table-layout:fixed; border-collapse:collapse}
col.idx{width:40px}
th,td{border:1px solid #d1d5db; padding:6px 8px; font-size:12px; vertical-align:top; overflow-wrap:anywhere}
th.idx,td.idx{text-align:center}
thead th{background:#f3f4f6; font-weight:700}
.blank-row{height:18px}
@media print{@page{size:A4; margin:15mm} body{margin:0}}";

/// Handler for `GET /api/report/html`.
pub async fn process(db: web::Data<Database>, query: web::Query<LimitQuery>) -> impl Responder {
    let raw_limit = query.limit;
    let renderer = HtmlRenderer::today();
    let result = db
        .run(move |conn| {
            let limit = fields::limit_or(raw_limit, DEFAULT_BUNDLE_LIMIT)?;
            render_report(conn, limit, &renderer)
        })
        .await;
    match result {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log_failure("Rendering HTML report failed", &e);
            e.error_response()
        }
    }
}

/// Renders a bundle as a standalone HTML document.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    printed_on: NaiveDate,
}

impl HtmlRenderer {
    pub fn new(printed_on: NaiveDate) -> Self {
        Self { printed_on }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, bundle: ReportBundle) -> String {
        let sections = sections(&bundle);

        let mut html = String::new();
        html.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
        html.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!(
            "<div class=\"header\"><h1>{}</h1><div class=\"muted\">Tanggal cetak: {}</div></div>\n",
            escape(TITLE),
            escape(&self.printed_on.format(PRINT_DATE_FORMAT).to_string())
        ));

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                for _ in 0..SECTION_GAP_ROWS {
                    html.push_str("<div class=\"blank-row\">&nbsp;</div>\n");
                }
            }
            section.write_to(&mut html);
        }

        html.push_str(&format!("<p class=\"muted\">{}</p>\n", escape(FOOTER)));
        html.push_str("</body>\n</html>\n");
        html
    }
}

struct Section {
    title: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Section {
    fn write_to(&self, html: &mut String) {
        html.push_str(&format!("<h2>{}</h2>\n", escape(self.title)));
        html.push_str("<table>\n<colgroup><col class=\"idx\">");
        for _ in 1..self.headers.len() {
            html.push_str("<col>");
        }
        html.push_str("</colgroup>\n<thead><tr>");
        for (i, header) in self.headers.iter().enumerate() {
            html.push_str(&format!("{}{}</th>", open_cell("th", i), escape(header)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for (n, row) in self.rows.iter().enumerate() {
            html.push_str("<tr>");
            html.push_str(&format!("{}{}</td>", open_cell("td", 0), n + 1));
            for (i, cell) in row.iter().enumerate() {
                html.push_str(&format!("{}{}</td>", open_cell("td", i + 1), escape(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n");
    }
}

fn open_cell(tag: &str, column: usize) -> String {
    if column == 0 {
        format!("<{tag} class=\"idx\">")
    } else {
        format!("<{tag}>")
    }
}

fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_safe(text)
}

fn text_or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

fn sections(bundle: &ReportBundle) -> Vec<Section> {
    let park_names: HashMap<i64, &str> = bundle
        .parks
        .iter()
        .map(|park| (park.id, park.name.as_str()))
        .collect();
    let park_of_plant: HashMap<i64, i64> = bundle
        .plants
        .iter()
        .map(|plant| (plant.id, plant.park_id))
        .collect();
    let park_name_for_report = |row: &ReportRow| -> String {
        let from_plant = || {
            park_of_plant
                .get(&row.report.plant_id)
                .and_then(|park_id| park_names.get(park_id).copied())
        };
        text_or_missing(row.park_name.as_deref().or_else(from_plant))
    };

    vec![
        Section {
            title: "I. Identitas Taman",
            headers: &["No.", "Nama", "Luas (m²)", "Lokasi"],
            rows: bundle
                .parks
                .iter()
                .map(|park| {
                    vec![
                        park.name.clone(),
                        park.area
                            .map(|area| area.to_string())
                            .unwrap_or_else(|| MISSING.to_string()),
                        text_or_missing(park.location.as_deref()),
                    ]
                })
                .collect(),
        },
        Section {
            title: "II. Susunan Petugas Taman",
            headers: &["No.", "Nama Petugas", "Jabatan"],
            rows: bundle
                .staff
                .iter()
                .map(|staff| vec![staff.name.clone(), text_or_missing(staff.role.as_deref())])
                .collect(),
        },
        Section {
            title: "III. Kegiatan yang Dilakukan",
            headers: &["No.", "Jenis Kegiatan"],
            rows: bundle
                .activities
                .iter()
                .map(|activity| vec![activity.activity_type.clone()])
                .collect(),
        },
        Section {
            title: "IV. Data Tanaman di Taman",
            headers: &["No.", "Nama Taman", "Nama Tanaman", "Nama Ilmiah", "Jenis"],
            rows: bundle
                .plants
                .iter()
                .map(|plant| {
                    vec![
                        text_or_missing(park_names.get(&plant.park_id).copied()),
                        text_or_missing(plant.common_name.as_deref()),
                        text_or_missing(plant.scientific_name.as_deref()),
                        text_or_missing(plant.kind.as_deref()),
                    ]
                })
                .collect(),
        },
        Section {
            title: "V. Laporan Pendataan Penataan Taman Kota",
            headers: &[
                "No.",
                "Tanggal",
                "Nama Taman",
                "Nama Tanaman",
                "Petugas",
                "Kegiatan",
                "Isi Laporan",
            ],
            rows: bundle
                .reports
                .iter()
                .map(|row| {
                    vec![
                        text_or_missing(Some(row.report.date.as_str())),
                        park_name_for_report(row),
                        text_or_missing(row.plant_name.as_deref()),
                        text_or_missing(row.staff_name.as_deref()),
                        text_or_missing(row.activity_type.as_deref()),
                        row.report.content.clone(),
                    ]
                })
                .collect(),
        },
    ]
}
