//! # shop-client
//!
//! Headless rendition of the ShopZone catalog client. Components produce
//! render-state values instead of drawing widgets, so a UI shell (or a test)
//! decides how to present them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_client::{Api, ProductsView};
//!
//! async fn example() {
//!     let api = Api::from_env();
//!     let client = reqwest::Client::new();
//!     let view = ProductsView::new(&api, "sneakers");
//!     let state = view.load(&client).settled().await;
//!     println!("{:?}", ProductsView::render(&state));
//! }
//! ```

pub mod api;
pub mod fetch;
pub mod navigation;
pub mod views;

pub use api::Api;
pub use fetch::{use_fetch, FetchError, FetchHandle, FetchState};
pub use navigation::{
    navigator_for, BackNavigator, BrowserHistory, ButtonStyle, GoBackButton, NavigationStack,
    Platform,
};
pub use views::{Alert, CardKey, HomeScreen, HomeSection, ProductCard, ProductsRender, ProductsView};
