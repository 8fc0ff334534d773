// Response shapes shared by several endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ "message": "..." }` plus whatever else the server sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
