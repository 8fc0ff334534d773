// src/companies/routes.rs

/// `GET` the signed-in company's dashboard
pub const COMPANY_DASHBOARD: &str = "/dashboard";
