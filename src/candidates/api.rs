//! Candidate calls: dashboard and saved offers

use tracing::{debug, info, warn};

use super::models::{
    CandidateDashboard, CandidateOfferEnvelope, SavedOffersResponse, ToggleSavedResponse,
};
use super::routes;
use crate::client::ApiClient;
use crate::common::ApiError;
use crate::offers::models::Offer;

impl ApiClient {
    /// GET /candidate/dashboard
    pub async fn candidate_dashboard(&self) -> Result<CandidateDashboard, ApiError> {
        self.get(routes::CANDIDATE_DASHBOARD).await
    }

    /// GET /candidate/offer/:id, unwrapped from `{ "offer": ... }`
    pub async fn candidate_offer(&self, id: u64) -> Result<Offer, ApiError> {
        let envelope: CandidateOfferEnvelope = self.get(&routes::candidate_offer(id)).await?;
        Ok(envelope.offer)
    }

    /// Whether the signed-in candidate already applied to `offer_id`
    pub async fn has_applied(&self, offer_id: u64) -> Result<bool, ApiError> {
        let dashboard = self.candidate_dashboard().await?;
        Ok(dashboard.has_applied(offer_id))
    }

    /// GET /saved-offers, unwrapped from `{ "savedOffers": [...] }`
    pub async fn saved_offers(&self) -> Result<Vec<Offer>, ApiError> {
        let response: SavedOffersResponse = self.get(routes::SAVED_OFFERS).await?;
        debug!(count = response.saved_offers.len(), "Fetched saved offers");
        Ok(response.saved_offers)
    }

    /// POST /saved-offers/:id
    ///
    /// Saves the offer if it is not saved, unsaves it otherwise.
    pub async fn toggle_saved_offer(&self, id: u64) -> Result<ToggleSavedResponse, ApiError> {
        let response: ToggleSavedResponse = self.post_empty(&routes::saved_offer(id)).await?;
        info!(offer_id = id, saved = ?response.saved, "Saved offer toggled");
        Ok(response)
    }

    pub async fn is_offer_saved(&self, id: u64) -> Result<bool, ApiError> {
        let response: SavedOffersResponse = self.get(routes::SAVED_OFFERS).await?;
        Ok(response.contains(id))
    }

    /// Unsave `offer_id` if it is currently saved.
    ///
    /// Never fails: errors are logged and swallowed so the caller's primary
    /// action goes ahead. Returns whether an unsave request succeeded.
    pub async fn ensure_unsaved(&self, offer_id: u64) -> bool {
        let saved = match self.is_offer_saved(offer_id).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(offer_id, error = %e, "Could not check saved status before applying");
                return false;
            }
        };

        if !saved {
            return false;
        }

        match self.toggle_saved_offer(offer_id).await {
            Ok(_) => {
                info!(offer_id, "Unsaved offer before applying");
                true
            }
            Err(e) => {
                warn!(offer_id, error = %e, "Could not unsave offer before applying");
                false
            }
        }
    }
}
