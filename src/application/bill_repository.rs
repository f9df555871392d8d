// Repository trait for saved bill records
use crate::domain::bill::{BillRecord, NewBillRecord};
use async_trait::async_trait;

#[async_trait]
pub trait BillRecordRepository: Send + Sync {
    /// Store a record, assigning its id and timestamp
    async fn create(&self, record: NewBillRecord) -> anyhow::Result<BillRecord>;

    /// All records of a user, newest first
    async fn find_by_user(&self, user_id: &str) -> anyhow::Result<Vec<BillRecord>>;
}
