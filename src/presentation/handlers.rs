// HTTP request handlers
use crate::application::error::BillError;
use crate::domain::appliance::ApplianceUsageInput;
use crate::domain::bill::{BillEstimateResult, NewBillRecord};
use crate::domain::user_appliance::{ApplianceUpdate, NewUserAppliance};
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub appliances: Vec<ApplianceUsageInput>,
    pub rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub estimated_data: BillEstimateResult,
    pub actual_bill: f64,
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the appliance presets
pub async fn list_presets(State(state): State<Arc<AppState>>) -> Response {
    json_response(
        StatusCode::OK,
        state.billing_service.presets(),
        "Presets fetched successfully",
    )
}

/// Estimate the monthly bill for a set of appliances
pub async fn estimate_bill(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Response, BillError> {
    let Json(request) = payload?;
    let result = state
        .billing_service
        .estimate(&request.appliances, request.rate)?;

    Ok(json_response(StatusCode::OK, result, "Bill estimated successfully"))
}

/// Compare an estimate with the actual bill
pub async fn compare_bill(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Response, BillError> {
    let Json(request) = payload?;
    let result = state.billing_service.compare(
        &request.estimated_data,
        request.actual_bill,
        request.threshold,
    )?;

    Ok(json_response(StatusCode::OK, result, "Comparison complete"))
}

/// Save a bill record
pub async fn save_record(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewBillRecord>, JsonRejection>,
) -> Result<Response, BillError> {
    let Json(record) = payload?;
    let saved = state.billing_service.save_record(record).await?;

    Ok(json_response(
        StatusCode::CREATED,
        saved,
        "Bill record saved successfully",
    ))
}

/// Bill history of one user, newest first
pub async fn bill_history(
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, BillError> {
    let user_id = query.user_id.unwrap_or_default();
    let history = state.billing_service.history(&user_id).await?;

    Ok(json_response(
        StatusCode::OK,
        history,
        "Bill history fetched successfully",
    ))
}

/// Add an appliance to a user's inventory
pub async fn create_appliance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewUserAppliance>, JsonRejection>,
) -> Result<Response, BillError> {
    let Json(appliance) = payload?;
    let created = state.appliance_service.create(appliance).await?;

    Ok(json_response(
        StatusCode::CREATED,
        created,
        "Appliance created successfully",
    ))
}

/// List a user's appliances
pub async fn list_appliances(
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, BillError> {
    let user_id = query.user_id.unwrap_or_default();
    let appliances = state.appliance_service.list(&user_id).await?;

    Ok(json_response(
        StatusCode::OK,
        appliances,
        "Appliances fetched successfully",
    ))
}

/// Update some fields of an appliance
pub async fn update_appliance(
    id: Result<Path<u64>, PathRejection>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ApplianceUpdate>, JsonRejection>,
) -> Result<Response, BillError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    let updated = state.appliance_service.update(id, update).await?;

    Ok(json_response(
        StatusCode::OK,
        updated,
        "Appliance updated successfully",
    ))
}

/// Remove an appliance
pub async fn delete_appliance(
    id: Result<Path<u64>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, BillError> {
    let Path(id) = id?;
    state.appliance_service.delete(id).await?;

    Ok(json_response(
        StatusCode::OK,
        serde_json::json!({ "id": id }),
        "Appliance deleted successfully",
    ))
}
