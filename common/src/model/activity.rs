use serde::{Deserialize, Serialize};

/// A kind of maintenance work (watering, pruning, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "id_kegiatan")]
    pub id: i64,
    #[serde(rename = "jenis_kegiatan")]
    pub activity_type: String,
}
