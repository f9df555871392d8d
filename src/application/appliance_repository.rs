// Repository trait for the per-user appliance inventory
use crate::domain::user_appliance::{ApplianceUpdate, NewUserAppliance, UserAppliance};
use async_trait::async_trait;

#[async_trait]
pub trait ApplianceRepository: Send + Sync {
    /// Store an appliance, assigning its id and timestamps
    async fn create(&self, appliance: NewUserAppliance) -> anyhow::Result<UserAppliance>;

    /// All appliances of a user, in creation order
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<UserAppliance>>;

    /// Apply a partial update; `None` when the id is unknown
    async fn update(
        &self,
        id: u64,
        update: ApplianceUpdate,
    ) -> anyhow::Result<Option<UserAppliance>>;

    /// Remove an appliance; `false` when the id is unknown
    async fn delete(&self, id: u64) -> anyhow::Result<bool>;
}
