// src/profile/validators.rs

use super::models::*;
use crate::auth::validators::validate_new_password;
use crate::common::validation::is_valid_email;
use crate::common::{ValidationResult, Validator};

pub struct ProfileValidator;

impl Validator<ProfileUpdate> for ProfileValidator {
    fn validate(&self, data: &ProfileUpdate) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                result.add_error("name", "Name cannot be empty");
            } else if name.len() > 255 {
                result.add_error("name", "Name must be less than 255 characters");
            }
        }

        if let Some(email) = &data.email {
            if !is_valid_email(email) {
                result.add_error("email", "Email must be a valid email address");
            }
        }

        if let Some(description) = &data.description {
            if description.chars().count() > 2000 {
                result.add_error("description", "Description must be less than 2000 characters");
            }
        }

        result
    }
}

pub struct PasswordValidator;

impl Validator<PasswordUpdate> for PasswordValidator {
    fn validate(&self, data: &PasswordUpdate) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(current) = &data.current_password {
            if current.is_empty() {
                result.add_error("current_password", "Current password is required");
            }
        }

        result.merge(validate_new_password(
            &data.password,
            &data.password_confirmation,
        ));

        result
    }
}
