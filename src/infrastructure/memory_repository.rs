// In-memory bill record and appliance repositories
use crate::application::appliance_repository::ApplianceRepository;
use crate::application::bill_repository::BillRecordRepository;
use crate::domain::bill::{BillRecord, NewBillRecord};
use crate::domain::user_appliance::{ApplianceUpdate, NewUserAppliance, UserAppliance};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    records: Vec<BillRecord>,
}

#[derive(Debug, Default)]
pub struct InMemoryBillRepository {
    store: RwLock<Store>,
}

impl InMemoryBillRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BillRecordRepository for InMemoryBillRepository {
    async fn create(&self, record: NewBillRecord) -> Result<BillRecord> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let saved = BillRecord::new(store.next_id, Utc::now(), record);
        store.records.push(saved.clone());

        Ok(saved)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<BillRecord>> {
        let store = self.store.read().await;

        let mut records: Vec<BillRecord> = store
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        // same timestamp: later insert first
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        Ok(records)
    }
}

#[derive(Debug, Default)]
struct ApplianceStore {
    next_id: u64,
    appliances: Vec<UserAppliance>,
}

#[derive(Debug, Default)]
pub struct InMemoryApplianceRepository {
    store: RwLock<ApplianceStore>,
}

impl InMemoryApplianceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplianceRepository for InMemoryApplianceRepository {
    async fn create(&self, appliance: NewUserAppliance) -> Result<UserAppliance> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let created = UserAppliance::new(store.next_id, Utc::now(), appliance);
        store.appliances.push(created.clone());

        Ok(created)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<UserAppliance>> {
        let store = self.store.read().await;

        Ok(store
            .appliances
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: u64, update: ApplianceUpdate) -> Result<Option<UserAppliance>> {
        let mut store = self.store.write().await;

        Ok(store.appliances.iter_mut().find(|a| a.id == id).map(|appliance| {
            appliance.apply(update, Utc::now());
            appliance.clone()
        }))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let mut store = self.store.write().await;
        let before = store.appliances.len();
        store.appliances.retain(|a| a.id != id);

        Ok(store.appliances.len() < before)
    }
}
