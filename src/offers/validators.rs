// src/offers/validators.rs

use super::models::*;
use crate::common::validation::{is_valid_email, is_valid_phone};
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;

pub const MAX_COVER_LETTER_LENGTH: usize = 2000;

// ============================================================================
// Offer Validators
// ============================================================================

pub struct OfferValidator;

impl Validator<OfferInput> for OfferValidator {
    fn validate(&self, data: &OfferInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required = [
            ("name", &data.name, "Offer name is required"),
            ("category", &data.category, "Category is required"),
            ("contract_type", &data.contract_type, "Contract type is required"),
            ("job_location", &data.job_location, "Job location is required"),
            ("degree", &data.degree, "Degree is required"),
            ("description", &data.description, "Description is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                result.add_error(field, message);
            }
        }

        if data.name.len() > 255 {
            result.add_error("name", "Offer name must be less than 255 characters");
        }

        if data.closing_date.trim().is_empty() {
            result.add_error("closing_date", "Closing date is required");
        } else if NaiveDate::parse_from_str(data.closing_date.trim(), "%Y-%m-%d").is_err() {
            result.add_error("closing_date", "Closing date must be in YYYY-MM-DD format");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Contact email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Contact email must be a valid email address");
        }

        result
    }
}

// ============================================================================
// Application Validators
// ============================================================================

pub struct ApplicationValidator;

impl Validator<ApplyRequest> for ApplicationValidator {
    fn validate(&self, data: &ApplyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.offer_id == 0 {
            result.add_error("offer_id", "Offer is required");
        }

        if data.phone.trim().is_empty() {
            result.add_error("phone", "Phone is required");
        } else if !is_valid_phone(&data.phone) {
            result.add_error("phone", "Phone must be a valid phone number");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Email must be a valid email address");
        }

        if data.cover_letter.trim().is_empty() {
            result.add_error("cl", "Cover letter is required");
        } else if data.cover_letter.chars().count() > MAX_COVER_LETTER_LENGTH {
            result.add_error("cl", "Cover letter must be less than 2000 characters");
        }

        if !data.data_consent {
            result.add_error("data_consent", "You must accept the data processing terms");
        }

        result
    }
}
