use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(rename = "id_petugas")]
    pub id: i64,
    #[serde(rename = "nama_petugas")]
    pub name: String,
    #[serde(rename = "jabatan")]
    pub role: Option<String>,
}
