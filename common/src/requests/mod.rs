//! Request payloads and query strings accepted by the API.
//!
//! Every field is optional at the type level so that a missing field reaches
//! the handler and is reported with a field-specific message instead of a
//! generic deserialization error.

pub mod coerce;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/taman`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPark {
    #[serde(rename = "nama_taman", default)]
    pub name: Option<String>,
    #[serde(
        rename = "luas_taman",
        default,
        deserialize_with = "coerce::lenient_i64"
    )]
    pub area: Option<i64>,
    #[serde(rename = "lokasi", default)]
    pub location: Option<String>,
}

/// Body of `POST /api/petugas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStaff {
    #[serde(rename = "nama_petugas", default)]
    pub name: Option<String>,
    #[serde(rename = "jabatan", default)]
    pub role: Option<String>,
}

/// Body of `POST /api/kegiatan`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewActivity {
    #[serde(rename = "jenis_kegiatan", default)]
    pub activity_type: Option<String>,
}

/// Body of `POST /api/tanaman`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlant {
    #[serde(rename = "id_taman", default, deserialize_with = "coerce::lenient_i64")]
    pub park_id: Option<i64>,
    #[serde(rename = "nama_umum", default)]
    pub common_name: Option<String>,
    #[serde(rename = "nama_ilmiah", default)]
    pub scientific_name: Option<String>,
    #[serde(rename = "jenis", default)]
    pub kind: Option<String>,
}

/// Body of `POST /api/laporan`.
///
/// `tanggal` falls back to the server's current time when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReport {
    #[serde(
        rename = "id_tanaman",
        default,
        deserialize_with = "coerce::lenient_i64"
    )]
    pub plant_id: Option<i64>,
    #[serde(
        rename = "id_petugas",
        default,
        deserialize_with = "coerce::lenient_i64"
    )]
    pub staff_id: Option<i64>,
    #[serde(
        rename = "id_kegiatan",
        default,
        deserialize_with = "coerce::lenient_i64"
    )]
    pub activity_id: Option<i64>,
    #[serde(rename = "tanggal", default)]
    pub date: Option<String>,
    #[serde(rename = "isi_laporan", default)]
    pub content: Option<String>,
}

/// Query string of `GET /api/tanaman`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlantFilter {
    #[serde(rename = "id_taman", default, deserialize_with = "coerce::lenient_i64")]
    pub park_id: Option<i64>,
}

/// `?limit=` on the report listings. A blank value means the endpoint's
/// default; the range is checked by the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitQuery {
    #[serde(default, deserialize_with = "coerce::lenient_i64")]
    pub limit: Option<i64>,
}

/// Body of `POST /api/admin/clear_all`.
///
/// Neither field can fail to deserialize, so a stray value in one of them
/// never discards the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearAllRequest {
    /// Must be exactly `true` for anything to be deleted.
    #[serde(default, deserialize_with = "coerce::exactly_true")]
    pub confirm: bool,
    #[serde(default = "reset_by_default", deserialize_with = "coerce::truthy")]
    pub reset_auto_increment: bool,
}

fn reset_by_default() -> bool {
    true
}

impl Default for ClearAllRequest {
    fn default() -> Self {
        Self {
            confirm: false,
            reset_auto_increment: reset_by_default(),
        }
    }
}
