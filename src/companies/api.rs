//! Company calls

use super::models::CompanyDashboard;
use super::routes;
use crate::client::ApiClient;
use crate::common::ApiError;

impl ApiClient {
    /// GET /dashboard
    pub async fn company_dashboard(&self) -> Result<CompanyDashboard, ApiError> {
        self.get(routes::COMPANY_DASHBOARD).await
    }
}
