// src/offers/models.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::companies::models::Company;

// ============================================================================
// Offer Models
// ============================================================================

/// A job offer as published by a company.
///
/// Only `id` is guaranteed. Fields the client does not model are kept in
/// `extra` so an offer can be passed on exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "contractType", skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, alias = "jobLocation", skip_serializing_if = "Option::is_none")]
    pub job_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "closingDate", skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<String>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Offer {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Offer #{}", self.id))
    }
}

/// Body for creating or updating an offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferInput {
    pub name: String,
    pub category: String,
    pub contract_type: String,
    pub job_location: String,
    pub degree: String,
    pub description: String,
    pub closing_date: String,
    pub email: String,
}

/// Optional filters for the offer list, sent as a query string
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfferFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_location: Option<String>,
}

impl OfferFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.contract_type.is_none()
            && self.job_location.is_none()
    }
}

/// `GET /offers` answers with a bare list or with `{ "offers": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OfferList {
    Wrapped { offers: Vec<Offer> },
    Bare(Vec<Offer>),
}

impl OfferList {
    pub fn into_offers(self) -> Vec<Offer> {
        match self {
            OfferList::Wrapped { offers } | OfferList::Bare(offers) => offers,
        }
    }
}

/// `POST`/`PUT /offers` answer with `{ "offer": ... }` or the offer itself
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OfferPayload {
    Wrapped { offer: Offer },
    Bare(Offer),
}

impl OfferPayload {
    pub fn into_offer(self) -> Offer {
        match self {
            OfferPayload::Wrapped { offer } | OfferPayload::Bare(offer) => offer,
        }
    }
}

// ============================================================================
// Application Models
// ============================================================================

/// Application submission. Field names match the backend's form:
/// `cl` is the cover letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub offer_id: u64,
    pub phone: String,
    pub email: String,
    #[serde(rename = "cl")]
    pub cover_letter: String,
    pub data_consent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
