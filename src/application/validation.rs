// Request validation for bills and the appliance inventory
use crate::application::error::{BillError, Result};
use crate::domain::appliance::ApplianceUsageInput;
use crate::domain::bill::NewBillRecord;
use crate::domain::user_appliance::{ApplianceUpdate, NewUserAppliance};

const MAX_DAILY_HOURS: f64 = 24.0;
const MIN_APPLIANCE_NAME_LEN: usize = 2;
const MIN_APPLIANCE_WATTAGE: f64 = 1.0;

/// Collects every violation so the caller gets them in one response.
#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check(&mut self, ok: bool, message: impl FnOnce() -> String) {
        if !ok {
            self.0.push(message());
        }
    }

    fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(BillError::Validation(self.0))
        }
    }
}

fn valid_hours(hours: f64) -> bool {
    (0.0..=MAX_DAILY_HOURS).contains(&hours)
}

pub fn validate_estimate(appliances: &[ApplianceUsageInput], rate: Option<f64>) -> Result<()> {
    let mut v = Violations::default();

    v.check(!appliances.is_empty(), || {
        "At least one appliance is required".to_string()
    });
    if let Some(rate) = rate {
        v.check(rate > 0.0, || format!("rate must be positive, got {}", rate));
    }

    for (i, item) in appliances.iter().enumerate() {
        v.check(item.count >= 1, || {
            format!("appliances[{}].count must be at least 1", i)
        });
        v.check(valid_hours(item.hours), || {
            format!("appliances[{}].hours must be between 0 and 24", i)
        });
        if let Some(watts) = item.watts {
            v.check(watts > 0.0, || {
                format!("appliances[{}].watts must be positive", i)
            });
        }
    }

    v.into_result()
}

pub fn validate_compare(actual_bill: f64, threshold: Option<f64>) -> Result<()> {
    let mut v = Violations::default();

    v.check(actual_bill > 0.0, || {
        "Actual bill must be a positive number".to_string()
    });
    if let Some(threshold) = threshold {
        v.check(threshold >= 1.0, || {
            format!("threshold must be at least 1, got {}", threshold)
        });
    }

    v.into_result()
}

pub fn validate_record(record: &NewBillRecord) -> Result<()> {
    let mut v = Violations::default();

    v.check(!record.user_id.trim().is_empty(), || {
        "UserId is required".to_string()
    });
    v.check(record.total_estimated_units >= 0.0, || {
        "totalEstimatedUnits cannot be negative".to_string()
    });
    v.check(record.total_estimated_cost >= 0.0, || {
        "totalEstimatedCost cannot be negative".to_string()
    });
    v.check(!record.breakdown.is_empty(), || {
        "Breakdown cannot be empty".to_string()
    });

    for (i, line) in record.breakdown.iter().enumerate() {
        v.check(line.count >= 1, || {
            format!("breakdown[{}].count must be at least 1", i)
        });
        v.check(valid_hours(line.hours), || {
            format!("breakdown[{}].hours must be between 0 and 24", i)
        });
        v.check(line.watts >= 0.0, || {
            format!("breakdown[{}].watts cannot be negative", i)
        });
        v.check(line.monthly_units >= 0.0, || {
            format!("breakdown[{}].monthlyUnits cannot be negative", i)
        });
        v.check(line.estimated_cost >= 0.0, || {
            format!("breakdown[{}].estimatedCost cannot be negative", i)
        });
    }

    v.into_result()
}

fn check_appliance_fields(
    v: &mut Violations,
    name: Option<&str>,
    wattage: Option<f64>,
    count: Option<u32>,
    hours: Option<f64>,
) {
    if let Some(name) = name {
        v.check(name.chars().count() >= MIN_APPLIANCE_NAME_LEN, || {
            "Name must be at least 2 characters long".to_string()
        });
    }
    if let Some(wattage) = wattage {
        v.check(wattage >= MIN_APPLIANCE_WATTAGE, || {
            "Wattage must be at least 1 watt".to_string()
        });
    }
    if let Some(count) = count {
        v.check(count >= 1, || "Count must be at least 1".to_string());
    }
    if let Some(hours) = hours {
        v.check(valid_hours(hours), || {
            "Usage hours must be between 0 and 24".to_string()
        });
    }
}

pub fn validate_new_appliance(appliance: &NewUserAppliance) -> Result<()> {
    let mut v = Violations::default();

    v.check(!appliance.user_id.trim().is_empty(), || {
        "UserId is required".to_string()
    });
    check_appliance_fields(
        &mut v,
        Some(&appliance.name),
        Some(appliance.wattage),
        Some(appliance.count),
        Some(appliance.default_usage_hours),
    );

    v.into_result()
}

pub fn validate_appliance_update(update: &ApplianceUpdate) -> Result<()> {
    let mut v = Violations::default();

    v.check(!update.is_empty(), || {
        "At least one field must be updated".to_string()
    });
    check_appliance_fields(
        &mut v,
        update.name.as_deref(),
        update.wattage,
        update.count,
        update.default_usage_hours,
    );

    v.into_result()
}
