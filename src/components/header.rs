//! Header Component

use leptos::prelude::*;

/// Top bar with the "new food" trigger
#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <span class="header-title">"Food Admin"</span>
            <button
                type="button"
                class="header-add-btn"
                on:click=move |_| on_open_modal.run(())
            >
                <span class="header-add-text">"New food"</span>
                <span class="header-add-icon">"+"</span>
            </button>
        </header>
    }
}
