//! Company data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::offers::models::Offer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, alias = "webLink", skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
}

/// `GET /dashboard` for company accounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
