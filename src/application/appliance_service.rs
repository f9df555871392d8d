// Appliance service - Per-user appliance inventory use cases
use crate::application::appliance_repository::ApplianceRepository;
use crate::application::error::{BillError, Result};
use crate::application::validation::{validate_appliance_update, validate_new_appliance};
use crate::domain::user_appliance::{ApplianceUpdate, NewUserAppliance, UserAppliance};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplianceService {
    repository: Arc<dyn ApplianceRepository>,
}

impl ApplianceService {
    pub fn new(repository: Arc<dyn ApplianceRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, appliance: NewUserAppliance) -> Result<UserAppliance> {
        validate_new_appliance(&appliance)?;

        let created = self.repository.create(appliance).await?;
        tracing::info!(
            "Created appliance {} ({}) for user {}",
            created.id,
            created.name,
            created.user_id
        );

        Ok(created)
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<UserAppliance>> {
        if user_id.trim().is_empty() {
            return Err(BillError::validation("UserId is required"));
        }

        Ok(self.repository.find_by_user(user_id).await?)
    }

    pub async fn update(&self, id: u64, update: ApplianceUpdate) -> Result<UserAppliance> {
        validate_appliance_update(&update)?;

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| BillError::NotFound("Appliance not found".to_string()))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(BillError::NotFound("Appliance not found".to_string()));
        }

        tracing::info!("Deleted appliance {}", id);
        Ok(())
    }
}
