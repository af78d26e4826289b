use crate::model::activity::Activity;
use crate::model::park::Park;
use crate::model::plant::Plant;
use crate::model::report::ReportRow;
use crate::model::staff::Staff;
use serde::{Deserialize, Serialize};

/// Everything a printable report needs, fetched in one go.
///
/// Every list may be empty; an empty list is still a complete bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportBundle {
    #[serde(rename = "taman")]
    pub parks: Vec<Park>,
    #[serde(rename = "petugas")]
    pub staff: Vec<Staff>,
    #[serde(rename = "kegiatan")]
    pub activities: Vec<Activity>,
    #[serde(rename = "tanaman")]
    pub plants: Vec<Plant>,
    #[serde(rename = "laporan")]
    pub reports: Vec<ReportRow>,
}
