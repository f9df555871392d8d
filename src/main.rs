// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::appliance_service::ApplianceService;
use crate::application::bill_service::BillingService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_repository::{
    InMemoryApplianceRepository, InMemoryBillRepository,
};
use crate::presentation::app_state::AppState;
use crate::presentation::router::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    let catalog = Arc::new(config.preset_catalog());
    tracing::info!("Loaded {} appliance presets", catalog.presets().len());

    // Create repositories (infrastructure layer)
    let bill_repository = Arc::new(InMemoryBillRepository::new());
    let appliance_repository = Arc::new(InMemoryApplianceRepository::new());

    // Create services (application layer)
    let billing_service = BillingService::new(catalog, config.billing.clone(), bill_repository);
    let appliance_service = ApplianceService::new(appliance_repository);

    // Create application state
    let state = Arc::new(AppState {
        billing_service,
        appliance_service,
    });

    // Build router (presentation layer)
    let router = create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting bill-tracker service on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
