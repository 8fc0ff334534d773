//! Offer calls

use tracing::{debug, info};

use super::models::{ApplyRequest, ApplyResponse, Offer, OfferFilters, OfferInput, OfferList, OfferPayload};
use super::routes;
use crate::client::ApiClient;
use crate::common::{ApiError, MessageResponse};

impl ApiClient {
    /// GET /offers
    pub async fn list_offers(&self, filters: &OfferFilters) -> Result<Vec<Offer>, ApiError> {
        let list: OfferList = if filters.is_empty() {
            self.get(routes::OFFERS).await?
        } else {
            self.get_with_query(routes::OFFERS, filters).await?
        };
        let offers = list.into_offers();
        debug!(count = offers.len(), "Fetched offers");
        Ok(offers)
    }

    /// GET /offers/:id
    pub async fn get_offer(&self, id: u64) -> Result<Offer, ApiError> {
        let payload: OfferPayload = self.get(&routes::offer(id)).await?;
        Ok(payload.into_offer())
    }

    /// POST /offers (company accounts)
    pub async fn create_offer(&self, input: &OfferInput) -> Result<Offer, ApiError> {
        let payload: OfferPayload = self.post(routes::OFFERS, input).await?;
        let offer = payload.into_offer();
        info!(offer_id = offer.id, "Offer created");
        Ok(offer)
    }

    /// PUT /offers/:id (company accounts)
    pub async fn update_offer(&self, id: u64, input: &OfferInput) -> Result<Offer, ApiError> {
        let payload: OfferPayload = self.put(&routes::offer(id), input).await?;
        info!(offer_id = id, "Offer updated");
        Ok(payload.into_offer())
    }

    /// DELETE /offers/:id (company accounts)
    pub async fn delete_offer(&self, id: u64) -> Result<MessageResponse, ApiError> {
        let response: MessageResponse = self.delete(&routes::offer(id)).await?;
        info!(offer_id = id, "Offer deleted");
        Ok(response)
    }

    /// POST /offers/:id/apply
    ///
    /// Unsaves the offer first if it is saved. That step is best-effort and
    /// is not rolled back if the application then fails.
    ///
    /// # Request Body
    /// ```json
    /// { "offer_id": 7, "phone": "...", "email": "...", "cl": "...", "data_consent": true }
    /// ```
    pub async fn apply_to_offer(&self, request: &ApplyRequest) -> Result<ApplyResponse, ApiError> {
        self.ensure_unsaved(request.offer_id).await;

        let response: ApplyResponse = self.post(&routes::apply(request.offer_id), request).await?;
        info!(offer_id = request.offer_id, "Application submitted");
        Ok(response)
    }
}
