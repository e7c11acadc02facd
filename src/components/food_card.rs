//! Food Card Component
//!
//! One row of the dashboard list.

use leptos::prelude::*;

use crate::models::Food;

/// A single food in the list, with edit, delete and availability controls
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_toggle_available: Callback<Food>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let edit_target = food.clone();
    let toggle_target = food.clone();
    let card_class = if available { "food-card" } else { "food-card unavailable" };

    view! {
        <div class=card_class>
            <header class="food-card-image">
                <img src=food.image alt=food.name.clone() />
            </header>
            <section class="food-card-body">
                <h2>{food.name}</h2>
                <p>{food.description}</p>
                <p class="food-card-price">"R$ " <b>{food.price}</b></p>
            </section>
            <section class="food-card-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon delete-btn"
                        on:click=move |_| on_delete.run(id)
                    >
                        "×"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        // Checked state follows the record; a successful toggle re-renders the row
                        <input
                            type="checkbox"
                            prop:checked=available
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_toggle_available.run(toggle_target.clone());
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
