//! Food Admin App
//!
//! Root component: builds the store and API client and provides them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FoodClient;
use crate::catalog::FoodCatalog;
use crate::components::Dashboard;
use crate::config::ApiConfig;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[APP] Using backend at {}", config.base_url);

    let store = Store::new(DashboardState::default());
    provide_context(store);
    provide_context(FoodCatalog::new(FoodClient::new(config), store));

    view! {
        <Dashboard />
    }
}
