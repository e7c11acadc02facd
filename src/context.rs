//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::FoodClient;
use crate::catalog::FoodCatalog;
use crate::store::AppStore;

/// Catalog actions wired to the real backend and the reactive store
pub type AppCatalog = FoodCatalog<FoodClient, AppStore>;

/// Get the catalog from context
pub fn use_catalog() -> AppCatalog {
    expect_context::<AppCatalog>()
}
