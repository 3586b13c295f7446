#[path = "common/mod.rs"]
mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use catalog::config::{Endpoint, parse_api_url};
use catalog::remote::auth::today_utc;
use catalog::{
    CatalogClient, CatalogController, CatalogProvider, ControllerOptions, Page, PageDirection,
    ProductId, compute_auth_token,
};
use common::mock_server::{MockCatalog, RunningCatalog, item};

const SECRET: &str = "integration-secret";

fn client_for(server: &RunningCatalog) -> CatalogClient {
    CatalogClient::new(Endpoint {
        url: parse_api_url(&server.url()).unwrap(),
        secret: SECRET.to_string(),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

/// 150 numeric ids with one item each, priced by id
fn full_catalog() -> MockCatalog {
    let ids = (1..=150).map(|n| json!(n)).collect();
    let items = (1..=150)
        .map(|n| {
            let brand = if n % 2 == 0 { Some("Even") } else { None };
            item(n, &format!("Product {n}"), n as f64, brand)
        })
        .collect();
    MockCatalog::new().with_ids(ids).with_items(items)
}

#[tokio::test]
async fn test_fetch_page_sends_both_actions_with_auth() {
    let server = full_catalog().start().await;
    let client = client_for(&server);

    let products = client.fetch_page(Page::FIRST).await;
    assert_eq!(products.len(), 50);
    assert_eq!(products[0].id, ProductId::from(1));
    assert_eq!(products[49].id, ProductId::from(50));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].body,
        json!({"action": "get_ids", "params": {"offset": 0, "limit": 50}})
    );
    assert_eq!(requests[1].body["action"], "get_items");
    assert_eq!(requests[1].body["params"]["ids"].as_array().unwrap().len(), 50);

    let expected = compute_auth_token(SECRET, today_utc());
    for request in &requests {
        assert_eq!(request.auth.as_deref(), Some(expected.as_str()));
        assert!(
            request
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("application/json"))
        );
    }
}

#[tokio::test]
async fn test_last_page_uses_offset_100() {
    let server = full_catalog().start().await;
    let client = client_for(&server);

    let products = client.fetch_page(Page::LAST).await;
    assert_eq!(products.len(), 50);
    assert_eq!(products[0].id, ProductId::from(101));
    assert_eq!(server.requests()[0].body["params"]["offset"], 100);
}

#[tokio::test]
async fn test_duplicate_items_keep_first() {
    let server = MockCatalog::new()
        .with_ids(vec![json!(5), json!(5), json!(6)])
        .with_items(vec![
            item(5, "First five", 1.0, None),
            item(6, "Six", 2.0, Some("Acme")),
            item(5, "Second five", 3.0, None),
        ])
        .start()
        .await;
    let client = client_for(&server);

    let products = client.fetch_page(Page::FIRST).await;
    let names: Vec<&str> = products.iter().map(|p| p.product.as_str()).collect();
    assert_eq!(names, vec!["First five", "Six"]);

    // Identifiers go out as the server listed them
    assert_eq!(
        server.requests()[1].body["params"]["ids"],
        json!([5, 5, 6])
    );
}

#[tokio::test]
async fn test_text_identifiers_round_trip() {
    let server = MockCatalog::new()
        .with_ids(vec![json!("1789ecf3-f81c"), json!("9f2d")])
        .with_items(vec![
            item("1789ecf3-f81c", "Ring", 16700.0, Some("Pandora")),
            item("9f2d", "Pendant", 5000.0, None),
        ])
        .start()
        .await;
    let client = client_for(&server);

    let products = client.fetch_page(Page::FIRST).await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::from("1789ecf3-f81c"));
    assert_eq!(products[0].brand.as_deref(), Some("Pandora"));
    assert!(products[1].brand.is_none());
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_page() {
    let server = MockCatalog::new()
        .failing_with(StatusCode::INTERNAL_SERVER_ERROR)
        .start()
        .await;
    let client = client_for(&server);

    assert!(client.fetch_page(Page::FIRST).await.is_empty());
    // The items call is still made after the identifier call fails
    assert_eq!(server.requests().len(), 2);

    let err = client.list_ids(0, 50).await.unwrap_err();
    assert_eq!(err.action, "get_ids");
    assert_eq!(err.status, Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.body.as_deref(), Some("catalog unavailable"));
}

#[tokio::test]
async fn test_controller_pages_through_live_client() {
    let server = full_catalog().start().await;
    let controller = CatalogController::new(client_for(&server), ControllerOptions::default());

    controller.start().await.unwrap();
    let snapshot = controller.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.products.len(), 50);

    controller
        .on_paginate(PageDirection::Next)
        .expect("page 2 exists")
        .await
        .unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.page.number(), 2);
    assert_eq!(snapshot.products[0].id, ProductId::from(51));

    controller.on_search_change("PRODUCT 100");
    let visible: Vec<String> = controller
        .visible_products()
        .iter()
        .map(|p| p.product.clone())
        .collect();
    assert_eq!(visible, vec!["Product 100".to_string()]);

    // Searching never goes back to the server
    assert_eq!(server.requests().len(), 4);
}
