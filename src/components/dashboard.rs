//! Dashboard Component
//!
//! Header, both modals and the food list, all derived from the app store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_catalog;
use crate::models::{Food, FoodEdits, NewFood};
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let catalog = use_catalog();

    // Load foods on mount
    let loader = catalog.clone();
    Effect::new(move |_| {
        let catalog = loader.clone();
        spawn_local(async move {
            catalog.load_foods().await;
        });
    });

    let toggle_modal = {
        let catalog = catalog.clone();
        Callback::new(move |_: ()| catalog.toggle_add_modal())
    };
    let toggle_edit_modal = {
        let catalog = catalog.clone();
        Callback::new(move |_: ()| catalog.toggle_edit_modal())
    };
    let handle_edit_food = {
        let catalog = catalog.clone();
        Callback::new(move |food: Food| catalog.edit_food(food))
    };
    let handle_add_food = {
        let catalog = catalog.clone();
        Callback::new(move |food: NewFood| {
            let catalog = catalog.clone();
            spawn_local(async move {
                catalog.add_food(food).await;
            });
        })
    };
    let handle_update_food = {
        let catalog = catalog.clone();
        Callback::new(move |edits: FoodEdits| {
            let catalog = catalog.clone();
            spawn_local(async move {
                catalog.update_food(edits).await;
            });
        })
    };
    let handle_delete_food = {
        let catalog = catalog.clone();
        Callback::new(move |id: u32| {
            let catalog = catalog.clone();
            spawn_local(async move {
                catalog.delete_food(id).await;
            });
        })
    };
    let handle_toggle_available = Callback::new(move |food: Food| {
        let catalog = catalog.clone();
        spawn_local(async move {
            catalog.toggle_available(food).await;
        });
    });

    view! {
        <Header on_open_modal=toggle_modal />
        <ModalAddFood
            open=Signal::derive(move || store.add_modal_open().get())
            on_close=toggle_modal
            on_submit=handle_add_food
        />
        <ModalEditFood
            open=Signal::derive(move || store.edit_modal_open().get())
            on_close=toggle_edit_modal
            editing_food=Signal::derive(move || store.editing_food().get())
            on_submit=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                // Whole record as key so edits re-render the row
                key=|food| food.clone()
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_delete=handle_delete_food
                            on_edit=handle_edit_food
                            on_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
