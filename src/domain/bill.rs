// Bill estimate, comparison and saved record domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::appliance::ApplianceUsageInput;

// Enough fraction digits to print any f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format with `digits` decimals, rounding from the exact binary value of `v`.
/// Values exactly half-way between two outputs round away from zero.
pub fn to_fixed(v: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, v);
    let half_way = exact
        .split_once('.')
        .map(|(_, fraction)| {
            let rest = &fraction[digits..];
            rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0')
        })
        .unwrap_or(false);

    if half_way {
        // v * 10^digits is exactly k + 0.5 here, so the product is exact
        let scale = 10f64.powi(digits as i32);
        format!("{:.*}", digits, (v * scale).round() / scale)
    } else {
        format!("{:.*}", digits, v)
    }
}

/// Round to two decimals for reporting.
pub fn round2(v: f64) -> f64 {
    to_fixed(v, 2).parse().unwrap_or(v)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillBreakdownItem {
    pub name: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<f64>,
    #[serde(default)]
    pub wattage_used: f64,
    #[serde(default)]
    pub monthly_units: f64,
    pub estimated_cost: f64,
}

impl BillBreakdownItem {
    pub fn from_input(
        input: &ApplianceUsageInput,
        wattage_used: f64,
        monthly_units: f64,
        estimated_cost: f64,
    ) -> Self {
        Self {
            name: input.name.clone(),
            count: input.count,
            hours: input.hours,
            watts: input.watts,
            wattage_used,
            monthly_units: round2(monthly_units),
            estimated_cost: round2(estimated_cost),
        }
    }
}

/// Monthly estimate for a set of appliances.
///
/// When received back from a client only `totalCost` and the breakdown names and
/// costs are required; everything else falls back to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillEstimateResult {
    pub breakdown: Vec<BillBreakdownItem>,
    #[serde(default)]
    pub total_units: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub rate_applied: f64,
}

impl BillEstimateResult {
    pub fn empty(rate: f64) -> Self {
        Self {
            breakdown: Vec::new(),
            total_units: 0.0,
            total_cost: 0.0,
            rate_applied: rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    HighDiscrepancy,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionRequired {
    ConfirmProceed,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub name: String,
    pub estimated_cost: f64,
    pub normalized_cost: f64,
    pub difference: f64,
}

impl NormalizedItem {
    /// Scale one line by the discrepancy ratio. The difference is taken from the
    /// unrounded product so it is rounded only once.
    pub fn scale(item: &BillBreakdownItem, ratio: f64) -> Self {
        let scaled = item.estimated_cost * ratio;
        Self {
            name: item.name.clone(),
            estimated_cost: item.estimated_cost,
            normalized_cost: round2(scaled),
            difference: round2(scaled - item.estimated_cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub original_estimate: f64,
    pub actual_bill: f64,
    pub ratio: f64,
    pub alert: bool,
    pub alert_type: AlertType,
    pub action_required: ActionRequired,
    pub alert_message: String,
    pub normalized_breakdown: Vec<NormalizedItem>,
}

/// One appliance line of a saved bill record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLine {
    pub name: String,
    pub count: u32,
    pub hours: f64,
    pub watts: f64,
    pub monthly_units: f64,
    pub estimated_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_cost: Option<f64>,
}

/// A bill record as submitted for saving, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillRecord {
    pub user_id: String,
    pub total_estimated_units: f64,
    pub total_estimated_cost: f64,
    #[serde(default)]
    pub actual_bill_amount: Option<f64>,
    #[serde(default)]
    pub discrepancy_ratio: Option<f64>,
    pub breakdown: Vec<RecordLine>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: u64,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub total_estimated_units: f64,
    pub total_estimated_cost: f64,
    pub actual_bill_amount: Option<f64>,
    pub discrepancy_ratio: Option<f64>,
    pub breakdown: Vec<RecordLine>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl BillRecord {
    pub fn new(id: u64, date: DateTime<Utc>, record: NewBillRecord) -> Self {
        Self {
            id,
            user_id: record.user_id,
            date,
            total_estimated_units: record.total_estimated_units,
            total_estimated_cost: record.total_estimated_cost,
            actual_bill_amount: record.actual_bill_amount,
            discrepancy_ratio: record.discrepancy_ratio,
            breakdown: record.breakdown,
            metadata: record.metadata,
        }
    }
}
