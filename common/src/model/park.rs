use serde::{Deserialize, Serialize};

/// A city park. Independent master data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    #[serde(rename = "id_taman")]
    pub id: i64,
    #[serde(rename = "nama_taman")]
    pub name: String,
    /// Area in square metres.
    #[serde(rename = "luas_taman")]
    pub area: Option<i64>,
    #[serde(rename = "lokasi")]
    pub location: Option<String>,
}
