// Application state for HTTP handlers
use crate::application::appliance_service::ApplianceService;
use crate::application::bill_service::BillingService;

#[derive(Clone)]
pub struct AppState {
    pub billing_service: BillingService,
    pub appliance_service: ApplianceService,
}
