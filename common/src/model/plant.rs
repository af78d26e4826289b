use serde::{Deserialize, Serialize};

/// A plant growing in exactly one park.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(rename = "id_tanaman")]
    pub id: i64,
    #[serde(rename = "id_taman")]
    pub park_id: i64,
    #[serde(rename = "nama_umum")]
    pub common_name: Option<String>,
    #[serde(rename = "nama_ilmiah")]
    pub scientific_name: Option<String>,
    #[serde(rename = "jenis")]
    pub kind: Option<String>,
}
