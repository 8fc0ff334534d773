// src/candidates/tests/mod.rs

mod applications_tests;
mod saved_offers_tests;
