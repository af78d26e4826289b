use serde::{Deserialize, Serialize};

/// A maintenance report as stored: one activity performed by one staff
/// member on one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "id_laporan")]
    pub id: i64,
    #[serde(rename = "id_tanaman")]
    pub plant_id: i64,
    #[serde(rename = "id_petugas")]
    pub staff_id: i64,
    #[serde(rename = "id_kegiatan")]
    pub activity_id: i64,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "tanggal")]
    pub date: String,
    #[serde(rename = "isi_laporan")]
    pub content: String,
}

/// A report joined with the names of everything it references.
///
/// The name fields are optional because the join is a left join: a row is
/// never dropped just because a referenced name could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(flatten)]
    pub report: Report,
    #[serde(rename = "id_taman")]
    pub park_id: Option<i64>,
    #[serde(rename = "tanaman")]
    pub plant_name: Option<String>,
    #[serde(rename = "petugas")]
    pub staff_name: Option<String>,
    #[serde(rename = "kegiatan")]
    pub activity_type: Option<String>,
    #[serde(rename = "taman")]
    pub park_name: Option<String>,
}
