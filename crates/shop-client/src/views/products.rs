//! Product grid for one sub-type

use reqwest::Client;
use serde_json::Value;

use crate::api::Api;
use crate::fetch::{use_fetch, FetchHandle, FetchState};

/// Alert message shown when the fetch error carries none
pub const FETCH_ERROR_FALLBACK: &str = "An error occurred while fetching products.";

/// Message shown when the resolved product list is empty
pub const EMPTY_MESSAGE: &str = "No products found.";

/// Modal alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Render key of a product card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardKey {
    Id(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub key: CardKey,
    pub product: Value,
}

/// What the product grid shows. Exactly one state applies at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsRender {
    Loading,
    Error(Alert),
    Empty { message: String },
    Grid(Vec<ProductCard>),
}

/// Products of every seller for a single sub-type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsView {
    sub_type: String,
    url: String,
}

impl ProductsView {
    pub fn new(api: &Api, sub_type: impl Into<String>) -> Self {
        let sub_type = sub_type.into();
        let url = api.sub_type_products(&sub_type);
        Self { sub_type, url }
    }

    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Start loading products; the listing is public so no token is sent
    pub fn load(&self, client: &Client) -> FetchHandle<Value> {
        use_fetch(client, self.url.clone(), None)
    }

    pub fn render(state: &FetchState<Value>) -> ProductsRender {
        if state.loading {
            return ProductsRender::Loading;
        }

        if let Some(error) = &state.error {
            let message = error.message();
            return ProductsRender::Error(Alert {
                title: "Error".to_string(),
                message: if message.is_empty() {
                    FETCH_ERROR_FALLBACK.to_string()
                } else {
                    message
                },
            });
        }

        let products = resolve_products(state.data.as_ref());
        if products.is_empty() {
            return ProductsRender::Empty {
                message: EMPTY_MESSAGE.to_string(),
            };
        }

        ProductsRender::Grid(
            products
                .iter()
                .enumerate()
                .map(|(index, product)| ProductCard {
                    key: card_key(product, index),
                    product: product.clone(),
                })
                .collect(),
        )
    }
}

/// Products are either the payload itself or its `products` array
pub fn resolve_products(data: Option<&Value>) -> &[Value] {
    match data {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => other
            .get("products")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
        None => &[][..],
    }
}

// Falsy ids (missing, null, "", 0) fall back to the position
fn card_key(product: &Value, index: usize) -> CardKey {
    match product.get("id") {
        Some(Value::String(id)) if !id.is_empty() => CardKey::Id(id.clone()),
        Some(Value::Number(id)) if id.as_f64() != Some(0.0) => CardKey::Id(id.to_string()),
        _ => CardKey::Index(index),
    }
}
