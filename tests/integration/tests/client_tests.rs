//! Catalog client tests against live servers
//!
//! Run with: cargo test -p integration-tests --test client_tests

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use integration_tests::{assert_status, fixtures::*, TestServer, BRANDS_PATH};
use serde_json::{json, Value};
use shop_client::{use_fetch, Api, CardKey, ProductsRender, ProductsView};
use tokio::net::TcpListener;

/// Serve a catalog stub: `sneakers` has products, `empty` has none,
/// anything else fails.
async fn catalog_stub() -> Api {
    let api = Api::new("http://placeholder");
    let route = api
        .all_sellers_all_brand_types_products()
        .trim_start_matches(api.base_url())
        .to_string();

    let router = Router::new().route(
        &format!("{route}/:sub_type"),
        get(|Path(sub_type): Path<String>| async move {
            match sub_type.as_str() {
                "sneakers" => (
                    StatusCode::OK,
                    Json(json!({ "products": [{ "id": "p1" }, { "name": "no id" }] })),
                ),
                "empty" => (StatusCode::OK, Json(json!([]))),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server error, please try again later." })),
                ),
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Api::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_products_view_renders_grid() {
    let api = catalog_stub().await;
    let view = ProductsView::new(&api, "sneakers");

    let state = view.load(&reqwest::Client::new()).settled().await;
    let ProductsRender::Grid(cards) = ProductsView::render(&state) else {
        panic!("expected grid, got {state:?}");
    };

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].key, CardKey::Id("p1".to_string()));
    assert_eq!(cards[1].key, CardKey::Index(1));
}

#[tokio::test]
async fn test_products_view_renders_empty() {
    let api = catalog_stub().await;
    let view = ProductsView::new(&api, "empty");

    let state = view.load(&reqwest::Client::new()).settled().await;
    assert_eq!(
        ProductsView::render(&state),
        ProductsRender::Empty {
            message: "No products found.".to_string()
        }
    );
}

#[tokio::test]
async fn test_products_view_renders_error_alert() {
    let api = catalog_stub().await;
    let view = ProductsView::new(&api, "unknown");

    let state = view.load(&reqwest::Client::new()).settled().await;
    let ProductsRender::Error(alert) = ProductsView::render(&state) else {
        panic!("expected alert, got {state:?}");
    };
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.message, "Server error, please try again later.");
}

#[tokio::test]
async fn test_fetch_seller_brands_with_token() {
    let server = TestServer::start().await.unwrap();
    let token = server.token(9001).unwrap();

    let form = BrandForm::unique().into_form().unwrap();
    let response = server
        .post_multipart(BRANDS_PATH, Some(&token), form)
        .await
        .unwrap();
    assert_status(response, reqwest::StatusCode::CREATED)
        .await
        .unwrap();

    let api = Api::new(server.base_url());
    let state = use_fetch::<Value>(&server.client, api.seller_brands(), Some(&token))
        .settled()
        .await;

    let data = state.data.expect("brands");
    assert_eq!(data["brands"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_fetch_without_token_reports_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let api = Api::new(server.base_url());

    let state = use_fetch::<Value>(&server.client, api.seller_brands(), None)
        .settled()
        .await;

    let error = state.error.expect("error");
    assert_eq!(error.status(), Some(401));
    assert_eq!(error.message(), "Missing authorization header");
}
