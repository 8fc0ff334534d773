// src/candidates/routes.rs

/// `GET` the candidate's dashboard (their applications)
pub const CANDIDATE_DASHBOARD: &str = "/candidate/dashboard";

/// `GET` the saved offers of the signed-in candidate
pub const SAVED_OFFERS: &str = "/saved-offers";

/// `GET` an offer as seen by the signed-in candidate
pub fn candidate_offer(id: u64) -> String {
    format!("/candidate/offer/{}", id)
}

/// `POST` toggles the saved state of an offer
pub fn saved_offer(id: u64) -> String {
    format!("/saved-offers/{}", id)
}
