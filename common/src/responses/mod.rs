use serde::{Deserialize, Serialize};

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Body returned by a successful `POST /api/admin/clear_all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearAllResponse {
    pub status: String,
    /// Tables in the order they were emptied.
    pub cleared: Vec<String>,
    pub reset_auto_increment: bool,
}
