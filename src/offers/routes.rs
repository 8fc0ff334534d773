// src/offers/routes.rs

/// `GET` lists offers, `POST` creates one (company accounts)
pub const OFFERS: &str = "/offers";

/// `GET`, `PUT` and `DELETE` a single offer
pub fn offer(id: u64) -> String {
    format!("/offers/{}", id)
}

/// `POST` an application to an offer
pub fn apply(id: u64) -> String {
    format!("/offers/{}/apply", id)
}
