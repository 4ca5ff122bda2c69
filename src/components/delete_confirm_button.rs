//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation with confirm/cancel actions. The
//! destructive callback only runs on the explicit confirm click.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows the delete button initially. When clicked, shows "Delete?" with
/// confirm/cancel buttons instead of firing right away.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `label` - text of the initial delete button (defaults to "×")
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, optional)] label: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let label = label.unwrap_or_else(|| "×".to_string());

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
