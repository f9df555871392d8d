// Bill service - Estimation, discrepancy normalization and bill history use cases
use crate::application::bill_repository::BillRecordRepository;
use crate::application::error::{BillError, Result};
use crate::application::validation::{validate_compare, validate_estimate, validate_record};
use crate::domain::appliance::{AppliancePreset, ApplianceUsageInput, PresetCatalog};
use crate::domain::bill::{
    round2, to_fixed, ActionRequired, AlertType, BillBreakdownItem, BillEstimateResult, BillRecord,
    ComparisonResult, NewBillRecord, NormalizedItem,
};
use crate::infrastructure::config::BillingSettings;
use std::sync::Arc;

pub const DAYS_IN_MONTH: f64 = 30.0;
pub const DEFAULT_RATE: f64 = 10.0;
pub const DEFAULT_THRESHOLD: f64 = 1.2;
pub const FALLBACK_WATTAGE: f64 = 100.0;

/// Explicit watts, then the catalog, then the fallback.
pub fn resolve_wattage(catalog: &PresetCatalog, item: &ApplianceUsageInput) -> f64 {
    item.explicit_watts()
        .or_else(|| catalog.wattage_for(&item.name))
        .unwrap_or(FALLBACK_WATTAGE)
}

/// Monthly energy and cost estimate for `appliances` at `rate` per kWh.
///
/// Per-line values are rounded for display, but the totals are summed from the
/// unrounded line values and rounded once at the end.
pub fn estimate_bill(
    catalog: &PresetCatalog,
    appliances: &[ApplianceUsageInput],
    rate: f64,
) -> BillEstimateResult {
    if appliances.is_empty() {
        return BillEstimateResult::empty(rate);
    }

    let mut total_units = 0.0;

    let breakdown: Vec<BillBreakdownItem> = appliances
        .iter()
        .map(|item| {
            let wattage = resolve_wattage(catalog, item);
            let daily_units = (wattage * f64::from(item.count) * item.hours) / 1000.0;
            let monthly_units = daily_units * DAYS_IN_MONTH;
            let cost = monthly_units * rate;

            total_units += monthly_units;

            BillBreakdownItem::from_input(item, wattage, monthly_units, cost)
        })
        .collect();

    let total_cost = total_units * rate;

    BillEstimateResult {
        breakdown,
        total_units: round2(total_units),
        total_cost: round2(total_cost),
        rate_applied: rate,
    }
}

/// Compare an estimate against the actual bill and rescale every line by the ratio.
pub fn compare_and_normalize(
    estimated: &BillEstimateResult,
    actual_bill_amount: f64,
    threshold: f64,
) -> Result<ComparisonResult> {
    let estimated_total = estimated.total_cost;

    if estimated_total == 0.0 {
        return Err(BillError::InvalidOperation(
            "Estimated bill cannot be zero for comparison".to_string(),
        ));
    }

    let ratio = actual_bill_amount / estimated_total;
    let is_high_mismatch = ratio > threshold;

    let normalized_breakdown = estimated
        .breakdown
        .iter()
        .map(|item| NormalizedItem::scale(item, ratio))
        .collect();

    let (alert_type, action_required, alert_message) = if is_high_mismatch {
        let percentage_diff = to_fixed(ratio * 100.0 - 100.0, 1);
        (
            AlertType::HighDiscrepancy,
            ActionRequired::ConfirmProceed,
            format!(
                "Critical: Actual bill is {}% higher than estimated. Please check your appliance usage inputs.",
                percentage_diff
            ),
        )
    } else {
        (
            AlertType::Normal,
            ActionRequired::None,
            "Bill is within expected range.".to_string(),
        )
    };

    Ok(ComparisonResult {
        original_estimate: estimated_total,
        actual_bill: actual_bill_amount,
        ratio: round2(ratio),
        alert: is_high_mismatch,
        alert_type,
        action_required,
        alert_message,
        normalized_breakdown,
    })
}

#[derive(Clone)]
pub struct BillingService {
    catalog: Arc<PresetCatalog>,
    settings: BillingSettings,
    repository: Arc<dyn BillRecordRepository>,
}

impl BillingService {
    pub fn new(
        catalog: Arc<PresetCatalog>,
        settings: BillingSettings,
        repository: Arc<dyn BillRecordRepository>,
    ) -> Self {
        Self {
            catalog,
            settings,
            repository,
        }
    }

    pub fn presets(&self) -> &[AppliancePreset] {
        self.catalog.presets()
    }

    pub fn estimate(
        &self,
        appliances: &[ApplianceUsageInput],
        rate: Option<f64>,
    ) -> Result<BillEstimateResult> {
        validate_estimate(appliances, rate)?;

        let rate = rate.unwrap_or(self.settings.default_rate);
        let result = estimate_bill(&self.catalog, appliances, rate);

        tracing::debug!(
            "Estimated {} appliances at rate {}: {} kWh, cost {}",
            appliances.len(),
            rate,
            result.total_units,
            result.total_cost
        );

        Ok(result)
    }

    pub fn compare(
        &self,
        estimated: &BillEstimateResult,
        actual_bill: f64,
        threshold: Option<f64>,
    ) -> Result<ComparisonResult> {
        validate_compare(actual_bill, threshold)?;

        let threshold = threshold.unwrap_or(self.settings.discrepancy_threshold);
        let result = compare_and_normalize(estimated, actual_bill, threshold)?;

        if result.alert {
            tracing::warn!(
                "High bill discrepancy: estimate {}, actual {}, ratio {}",
                result.original_estimate,
                result.actual_bill,
                result.ratio
            );
        }

        Ok(result)
    }

    pub async fn save_record(&self, record: NewBillRecord) -> Result<BillRecord> {
        validate_record(&record)?;

        let saved = self.repository.create(record).await?;
        tracing::info!("Saved bill record {} for user {}", saved.id, saved.user_id);

        Ok(saved)
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<BillRecord>> {
        if user_id.trim().is_empty() {
            return Err(BillError::validation("UserId is required"));
        }

        let records = self.repository.find_by_user(user_id).await?;
        tracing::debug!("Found {} bill records for user {}", records.len(), user_id);

        Ok(records)
    }
}
