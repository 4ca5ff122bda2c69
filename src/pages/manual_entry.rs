//! Manual Entry Page
//!
//! Placeholder scaffolding; the entry forms are not implemented yet.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn ManualEntryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="placeholder-page">
            <div class="placeholder-card">
                <h2>"Manual Entry"</h2>
                <p>"Bulk entry of balances and transactions is coming soon."</p>
                <p>
                    "In the meantime, individual assets can be managed on the "
                    <button
                        class="link-btn"
                        on:click=move |_| ctx.navigate(Page::OtherAssets)
                    >
                        "Other Assets"
                    </button>
                    " page."
                </p>
            </div>
        </div>
    }
}
