//! HTTP end-to-end tests over the in-memory store

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use chrono::NaiveDate;
use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::CustomerId;
use domain_customer::{CustomerService, CustomerStore, InMemoryCustomerStore};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{
    assert_error_json, assert_quote_json, customer_json, quote_request_json,
    CustomerDetailsBuilder, CustomerFixtures,
};

struct TestApp {
    server: TestServer,
    store: InMemoryCustomerStore,
}

fn setup() -> TestApp {
    let store = InMemoryCustomerStore::new();
    let service = CustomerService::new(Arc::new(store.clone()));
    let server = TestServer::new(create_router(service, ApiConfig::default()))
        .expect("Failed to build test server");
    TestApp { server, store }
}

impl TestApp {
    async fn quote(&self, body: &Value) -> axum_test::TestResponse {
        self.server.post("/customers/quote").json(body).await
    }
}

mod quote {
    use super::*;

    #[tokio::test]
    async fn test_quote_returns_premium_without_id() {
        let app = setup();

        let response = app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_quote_json(&body, "Jonatan", "SP", 2500.0);
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_quote_persists_original_vehicle_value() {
        let app = setup();

        app.quote(&quote_request_json(&CustomerFixtures::jonatan()))
            .await
            .assert_status_ok();

        let stored = app
            .store
            .find_by_id(CustomerId::new(1), None)
            .await
            .unwrap()
            .expect("quote should be persisted");
        assert_eq!(stored.vehicle_value, 50000.0);
        assert_eq!(stored.document, "12345678900");
    }

    #[tokio::test]
    async fn test_quote_tiers() {
        let app = setup();

        let joao = app.quote(&quote_request_json(&CustomerFixtures::joao())).await;
        assert_quote_json(&joao.json::<Value>(), "Joao", "RJ", 2400.0);

        let ricardo = app.quote(&quote_request_json(&CustomerFixtures::ricardo())).await;
        assert_quote_json(&ricardo.json::<Value>(), "Ricardo", "SP", 9000.0);

        let lower_sp = CustomerDetailsBuilder::new()
            .with_location("sp")
            .with_vehicle_value(70000.0)
            .build_quote_request();
        assert_eq!(app.quote(&lower_sp).await.json::<Value>()["vehicle_value"], 3500.0);
    }

    #[tokio::test]
    async fn test_quote_with_zero_value_is_bad_request() {
        let app = setup();

        let response = app
            .quote(&quote_request_json(&CustomerFixtures::leandro_zero_value()))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error_json(
            &response.json::<Value>(),
            400,
            "Invalid vehicle value or location",
            "/customers/quote",
        );
        assert!(app.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_quote_with_negative_value_is_bad_request() {
        let app = setup();
        let body = CustomerDetailsBuilder::new()
            .with_vehicle_value(-10.0)
            .build_quote_request();

        let response = app.quote(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "Bad Request");
        assert!(app.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_quote_with_blank_name_is_bad_request() {
        let app = setup();
        let body = CustomerDetailsBuilder::new().with_name("  ").build_quote_request();

        app.quote(&body).await.assert_status(StatusCode::BAD_REQUEST);
        assert!(app.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_quote_missing_birth_date_is_bad_request() {
        let app = setup();
        let body = json!({
            "customer": {
                "name": "Jonatan",
                "document": "12345678900",
                "location": "SP",
                "vehicle_value": 50000
            }
        });

        let response = app.quote(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["path"], "/customers/quote");
    }

    #[tokio::test]
    async fn test_quote_without_wrapper_is_bad_request() {
        let app = setup();

        let response = app.quote(&customer_json(&CustomerFixtures::jonatan())).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod read {
    use super::*;

    #[tokio::test]
    async fn test_list_is_empty_without_customers() {
        let app = setup();

        let response = app.server.get("/customers/quotes").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_list_returns_stored_values_with_ids() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;

        let response = app.server.get("/customers/quotes").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], 1);
        assert_quote_json(&entries[0], "Jonatan", "SP", 50000.0);
    }

    #[tokio::test]
    async fn test_list_is_in_creation_order() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::ricardo())).await;
        app.quote(&quote_request_json(&CustomerFixtures::joao())).await;

        let body: Value = app.server.get("/customers/quotes").await.json();

        assert_eq!(body[0]["name"], "Ricardo");
        assert_eq!(body[1]["name"], "Joao");
        assert_eq!(body[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_stored_value() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::joao())).await;

        let response = app.server.get("/customers/quote/1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 1);
        assert_quote_json(&body, "Joao", "RJ", 60000.0);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let app = setup();

        let response = app.server.get("/customers/quote/99").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_json(&response.json::<Value>(), 404, "Customer not found", "/customers/quote/99");
        assert_eq!(response.json::<Value>()["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_bad_request() {
        let app = setup();

        let response = app.server.get("/customers/quote/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["path"], "/customers/quote/abc");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_all_fields_verbatim() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;
        let replacement = CustomerDetailsBuilder::new()
            .with_name("Jonatan Silva")
            .with_document("00011122233")
            .with_location("MG")
            .with_birth_date(NaiveDate::from_ymd_opt(1988, 7, 14).unwrap())
            .with_vehicle_value(80000.0)
            .build();

        let response = app
            .server
            .put("/customers/quote/1")
            .json(&customer_json(&replacement))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 1);
        assert_quote_json(&body, "Jonatan Silva", "MG", 80000.0);

        let stored = app
            .store
            .find_by_id(CustomerId::new(1), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.document, "00011122233");
        assert_eq!(stored.birth_date, NaiveDate::from_ymd_opt(1988, 7, 14).unwrap());
    }

    #[tokio::test]
    async fn test_update_accepts_zero_value() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;
        let body = CustomerDetailsBuilder::new().with_vehicle_value(0.0).build_json();

        let response = app.server.put("/customers/quote/1").json(&body).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["vehicle_value"], 0.0);
    }

    #[tokio::test]
    async fn test_update_with_negative_value_is_bad_request() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;
        let body = CustomerDetailsBuilder::new().with_vehicle_value(-1.0).build_json();

        let response = app.server.put("/customers/quote/1").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["path"], "/customers/quote/1");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let app = setup();
        let body = CustomerDetailsBuilder::new().build_json();

        let response = app.server.put("/customers/quote/7").json(&body).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_json(&response.json::<Value>(), 404, "Customer not found", "/customers/quote/7");
        assert!(app.store.is_empty().await);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_removes_customer() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;

        let response = app.server.delete("/customers/quotes/1").await;

        response.assert_status_ok();
        assert!(response.text().is_empty());
        app.server
            .get("/customers/quote/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_not_found() {
        let app = setup();
        app.quote(&quote_request_json(&CustomerFixtures::jonatan())).await;
        app.server.delete("/customers/quotes/1").await.assert_status_ok();

        let response = app.server.delete("/customers/quotes/1").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_json(&response.json::<Value>(), 404, "Customer not found", "/customers/quotes/1");
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_version() {
        let app = setup();

        let response = app.server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], ApiConfig::default().version);
    }

    #[tokio::test]
    async fn test_readiness_with_memory_store() {
        let app = setup();

        let response = app.server.get("/health/ready").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ready");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_body() {
        let app = setup();

        let response = app.server.get("/policies").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["path"], "/policies");
    }
}

mod routing {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_method_uses_error_body() {
        let app = setup();

        let response = app.server.delete("/customers/quote/1").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = response.json();
        assert_eq!(body["status"], 405);
        assert_eq!(body["error"], "Method Not Allowed");
        assert_eq!(body["path"], "/customers/quote/1");
    }

    #[tokio::test]
    async fn test_unsupported_method_on_list_route() {
        let app = setup();

        let response = app.server.post("/customers/quotes").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<Value>()["path"], "/customers/quotes");
    }

    #[tokio::test]
    async fn test_response_carries_generated_request_id() {
        let app = setup();

        let response = app.server.get("/customers/quotes").await;

        let request_id = response
            .headers()
            .get("x-request-id")
            .expect("request id header");
        assert!(!request_id.is_empty());
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let app = setup();

        let response = app
            .server
            .post("/customers/quote")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("quote-abc-123"),
            )
            .json(&quote_request_json(&CustomerFixtures::jonatan()))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "quote-abc-123"
        );
    }
}
