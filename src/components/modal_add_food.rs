//! Add Food Modal
//!
//! Form collecting a new food's fields.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::NewFood;

/// Modal with the new food form; closes itself after submitting
#[component]
pub fn ModalAddFood(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<NewFood>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(NewFood {
            name: name.get(),
            description: description.get(),
            price: price.get(),
            image: image.get(),
        });
        set_image.set(String::new());
        set_name.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
        on_close.run(());
    };

    view! {
        <Modal open=open on_close=on_close>
            <form class="food-form" on:submit=submit>
                <h1>"New food"</h1>
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
                <button type="submit" class="food-form-submit">"Add food"</button>
            </form>
        </Modal>
    }
}
