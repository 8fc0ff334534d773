// src/profile/routes.rs

pub const PROFILE: &str = "/profile";
pub const PASSWORD: &str = "/password";
