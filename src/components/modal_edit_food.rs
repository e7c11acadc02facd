//! Edit Food Modal
//!
//! Form pre-filled from the editing target.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::{Food, FoodEdits};

/// Modal with the edit form; closes itself after submitting
#[component]
pub fn ModalEditFood(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] on_submit: Callback<FoodEdits>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Reset fields whenever another food is selected
    Effect::new(move |_| {
        let food = editing_food.get().unwrap_or_default();
        set_image.set(food.image);
        set_name.set(food.name);
        set_price.set(food.price);
        set_description.set(food.description);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(FoodEdits {
            name: Some(name.get()),
            description: Some(description.get()),
            price: Some(price.get()),
            image: Some(image.get()),
            available: None,
        });
        on_close.run(());
    };

    view! {
        <Modal open=open on_close=on_close>
            <form class="food-form" on:submit=submit>
                <h1>"Edit food"</h1>
                <input
                    type="text"
                    placeholder="Paste the image URL here"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Ex: Moda Italiana"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Ex: 19.90"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit" class="food-form-submit">"Save changes"</button>
            </form>
        </Modal>
    }
}
