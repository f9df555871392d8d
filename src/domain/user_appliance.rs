// Per-user appliance inventory
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::appliance::ApplianceCategory;

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserAppliance {
    pub user_id: String,
    #[serde(default)]
    pub category: ApplianceCategory,
    pub name: String,
    pub wattage: f64,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub default_usage_hours: f64,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceUpdate {
    pub category: Option<ApplianceCategory>,
    pub name: Option<String>,
    pub wattage: Option<f64>,
    pub count: Option<u32>,
    pub default_usage_hours: Option<f64>,
}

impl ApplianceUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAppliance {
    pub id: u64,
    pub user_id: String,
    pub category: ApplianceCategory,
    pub name: String,
    pub wattage: f64,
    pub count: u32,
    pub default_usage_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAppliance {
    pub fn new(id: u64, now: DateTime<Utc>, appliance: NewUserAppliance) -> Self {
        Self {
            id,
            user_id: appliance.user_id,
            category: appliance.category,
            name: appliance.name,
            wattage: appliance.wattage,
            count: appliance.count,
            default_usage_hours: appliance.default_usage_hours,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: ApplianceUpdate, now: DateTime<Utc>) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(wattage) = update.wattage {
            self.wattage = wattage;
        }
        if let Some(count) = update.count {
            self.count = count;
        }
        if let Some(hours) = update.default_usage_hours {
            self.default_usage_hours = hours;
        }
        self.updated_at = now;
    }
}
