// src/auth/validators.rs

use super::models::{LoginRequest, RegisterRequest};
use crate::common::validation::is_valid_email;
use crate::common::{ValidationResult, Validator};

pub const MIN_PASSWORD_LENGTH: usize = 8;
const VALID_ROLES: &[&str] = &["candidate", "company"];

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Email must be a valid email address");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}

pub struct RegisterValidator;

impl Validator<RegisterRequest> for RegisterValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Name must be less than 255 characters");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Email must be a valid email address");
        }

        result.merge(validate_new_password(
            &data.password,
            &data.password_confirmation,
        ));

        if let Some(role) = &data.role {
            if !VALID_ROLES.contains(&role.as_str()) {
                result.add_error("role", "Role must be candidate or company");
            }
        }

        result
    }
}

/// Shared by registration and the password settings form
pub fn validate_new_password(password: &str, confirmation: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        result.add_error("password", "Password must be at least 8 characters");
    }

    if password != confirmation {
        result.add_error("password_confirmation", "Passwords do not match");
    }

    result
}
