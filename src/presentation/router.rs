// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    bill_history, compare_bill, create_appliance, delete_appliance, estimate_bill, health_check,
    list_appliances, list_presets, save_record, update_appliance,
};
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/bills/presets", get(list_presets))
        .route("/api/bills/estimate", post(estimate_bill))
        .route("/api/bills/compare", post(compare_bill))
        .route("/api/bills/save", post(save_record))
        .route("/api/bills/history", get(bill_history))
        .route("/api/appliances", post(create_appliance).get(list_appliances))
        .route(
            "/api/appliances/:id",
            patch(update_appliance).delete(delete_appliance),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::appliance_service::ApplianceService;
    use crate::application::bill_service::BillingService;
    use crate::domain::appliance::PresetCatalog;
    use crate::infrastructure::config::BillingSettings;
    use crate::infrastructure::memory_repository::{
        InMemoryApplianceRepository, InMemoryBillRepository,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let billing_service = BillingService::new(
            Arc::new(PresetCatalog::default()),
            BillingSettings::default(),
            Arc::new(InMemoryBillRepository::new()),
        );
        let appliance_service = ApplianceService::new(Arc::new(InMemoryApplianceRepository::new()));
        create_router(Arc::new(AppState {
            billing_service,
            appliance_service,
        }))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_presets() {
        let (status, body) = send(&app(), Method::GET, "/api/bills/presets", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 29);
        assert_eq!(
            body["data"][6],
            json!({ "name": "LED Bulb", "category": "Lighting", "wattage": 9.0 })
        );
    }

    #[tokio::test]
    async fn test_estimate_uses_default_rate() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/estimate",
            Some(json!({ "appliances": [{ "name": "LED Bulb", "count": 5, "hours": 5 }] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["totalUnits"], json!(6.75));
        assert_eq!(body["data"]["totalCost"], json!(67.5));
        assert_eq!(body["data"]["rateApplied"], json!(10.0));
        assert_eq!(body["data"]["breakdown"][0]["wattageUsed"], json!(9.0));
    }

    #[tokio::test]
    async fn test_estimate_rejects_empty_list() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/estimate",
            Some(json!({ "appliances": [], "rate": 8 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!(["At least one appliance is required"]));
    }

    #[tokio::test]
    async fn test_compare_flags_high_discrepancy() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/compare",
            Some(json!({
                "estimatedData": {
                    "totalCost": 1000,
                    "breakdown": [{ "name": "AC (1.5 Ton)", "estimatedCost": 1000 }]
                },
                "actualBill": 1500
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["ratio"], json!(1.5));
        assert_eq!(data["alert"], json!(true));
        assert_eq!(data["alertType"], json!("HIGH_DISCREPANCY"));
        assert_eq!(data["actionRequired"], json!("CONFIRM_PROCEED"));
        assert_eq!(data["normalizedBreakdown"][0]["normalizedCost"], json!(1500.0));
        assert_eq!(data["normalizedBreakdown"][0]["difference"], json!(500.0));
    }

    #[tokio::test]
    async fn test_compare_zero_estimate() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/compare",
            Some(json!({
                "estimatedData": { "totalCost": 0, "breakdown": [] },
                "actualBill": 1500,
                "threshold": 1.2
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!("Estimated bill cannot be zero for comparison"));
    }

    #[tokio::test]
    async fn test_save_then_history() {
        let app = app();
        let record = json!({
            "userId": "user-1",
            "totalEstimatedUnits": 30,
            "totalEstimatedCost": 240,
            "actualBillAmount": 300,
            "discrepancyRatio": 1.25,
            "breakdown": [{
                "name": "Unknown Device", "count": 1, "hours": 10, "watts": 100,
                "monthlyUnits": 30, "estimatedCost": 240
            }],
            "metadata": { "alertType": "HIGH_DISCREPANCY" }
        });

        let (status, saved) = send(&app, Method::POST, "/api/bills/save", Some(record)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["data"]["id"], json!(1));
        assert_eq!(saved["data"]["metadata"]["alertType"], json!("HIGH_DISCREPANCY"));

        let (status, history) =
            send(&app, Method::GET, "/api/bills/history?userId=user-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history["data"].as_array().unwrap().len(), 1);
        assert_eq!(history["data"][0]["totalEstimatedCost"], json!(240.0));
    }

    #[tokio::test]
    async fn test_history_requires_user() {
        let (status, body) = send(&app(), Method::GET, "/api/bills/history", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!(["UserId is required"]));
    }

    #[tokio::test]
    async fn test_estimate_malformed_body_uses_envelope() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/estimate",
            Some(json!({ "appliances": [{ "name": "Fan", "count": 1.5, "hours": 2 }] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], json!("Validation failed"));
        assert!(body["errors"][0].as_str().unwrap().contains("u32"));
    }

    #[tokio::test]
    async fn test_compare_missing_field_uses_envelope() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/bills/compare",
            Some(json!({ "estimatedData": { "totalCost": 1000, "breakdown": [] } })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert!(body["errors"][0].as_str().unwrap().contains("actualBill"));
    }

    #[tokio::test]
    async fn test_appliance_create_and_list() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/appliances",
            Some(json!({ "userId": "user-1", "name": "Ceiling Fan", "wattage": 75 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["data"]["id"], json!(1));
        assert_eq!(created["data"]["category"], json!("Other"));
        assert_eq!(created["data"]["count"], json!(1));
        assert_eq!(created["data"]["defaultUsageHours"], json!(0.0));

        send(
            &app,
            Method::POST,
            "/api/appliances",
            Some(json!({ "userId": "user-2", "name": "Cooler", "wattage": 150 })),
        )
        .await;

        let (status, listed) = send(&app, Method::GET, "/api/appliances?userId=user-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["name"], json!("Ceiling Fan"));
    }

    #[tokio::test]
    async fn test_appliance_create_rejects_short_name() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/appliances",
            Some(json!({ "userId": "user-1", "name": "F", "wattage": 75 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!(["Name must be at least 2 characters long"]));
    }

    #[tokio::test]
    async fn test_appliance_patch() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/api/appliances",
            Some(json!({ "userId": "user-1", "name": "Geyser", "wattage": 2000, "count": 1 })),
        )
        .await;

        let (status, updated) = send(
            &app,
            Method::PATCH,
            "/api/appliances/1",
            Some(json!({ "defaultUsageHours": 1.5, "category": "Heating" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["data"]["defaultUsageHours"], json!(1.5));
        assert_eq!(updated["data"]["category"], json!("Heating"));
        assert_eq!(updated["data"]["wattage"], json!(2000.0));
    }

    #[tokio::test]
    async fn test_appliance_delete() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/api/appliances",
            Some(json!({ "userId": "user-1", "name": "Toaster", "wattage": 800 })),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, "/api/appliances/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "id": 1 }));

        let (status, body) = send(&app, Method::DELETE, "/api/appliances/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!("Appliance not found"));
    }

    #[tokio::test]
    async fn test_appliance_bad_id_uses_envelope() {
        let (status, body) = send(&app(), Method::DELETE, "/api/appliances/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
    }
}
