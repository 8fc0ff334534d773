// src/candidates/models.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::offers::models::Offer;

// ============================================================================
// Saved Offer Models
// ============================================================================

/// `GET /saved-offers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedOffersResponse {
    #[serde(default, rename = "savedOffers", alias = "saved_offers")]
    pub saved_offers: Vec<Offer>,
}

impl SavedOffersResponse {
    pub fn contains(&self, offer_id: u64) -> bool {
        self.saved_offers.iter().any(|offer| offer.id == offer_id)
    }
}

/// `POST /saved-offers/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggleSavedResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
}

// ============================================================================
// Application Models
// ============================================================================

/// One application listed on the candidate dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: u64,
    #[serde(default, alias = "offerId", skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,
}

impl ApplicationSummary {
    /// Whether this application was made to `offer_id`
    pub fn targets(&self, offer_id: u64) -> bool {
        self.offer_id == Some(offer_id)
            || self.offer.as_ref().map(|o| o.id) == Some(offer_id)
    }
}

/// `GET /candidate/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDashboard {
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateDashboard {
    pub fn has_applied(&self, offer_id: u64) -> bool {
        self.applications.iter().any(|a| a.targets(offer_id))
    }
}

/// `GET /candidate/offer/:id` wraps the offer as `{ "offer": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateOfferEnvelope {
    pub offer: Offer,
}
