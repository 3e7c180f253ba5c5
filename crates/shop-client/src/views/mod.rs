//! Screen and component render state

pub mod home;
pub mod products;

pub use home::{HomeScreen, HomeSection};
pub use products::{
    resolve_products, Alert, CardKey, ProductCard, ProductsRender, ProductsView, EMPTY_MESSAGE,
    FETCH_ERROR_FALLBACK,
};
