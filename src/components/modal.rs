//! Modal Component
//!
//! Overlay dialog shell shared by the add and edit forms.

use leptos::prelude::*;

/// Overlay dialog, rendered only while `open` is true
///
/// # Arguments
/// * `open` - Visibility flag owned by the caller
/// * `on_close` - Called when the overlay or the close button is clicked
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button
                        type="button"
                        class="modal-close-btn"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
