//! Assetboard Frontend App
//!
//! Application shell: sidebar navigation plus the active page.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::pages::{CredentialsPage, ManualEntryPage, OtherAssetsPage};

const PAGES: &[Page] = &[Page::OtherAssets, Page::ManualEntry, Page::Credentials];

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::default());

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <span class="sidebar-title">"Assetboard"</span>
                </div>
                <nav class="sidebar-nav">
                    {PAGES
                        .iter()
                        .map(|&p| {
                            view! {
                                <button
                                    class=move || {
                                        if page.get() == p { "nav-item active" } else { "nav-item" }
                                    }
                                    on:click=move |_| set_page.set(p)
                                >
                                    {p.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <main class="main-content">
                <h1 class="page-title">{move || page.get().title()}</h1>
                {move || match page.get() {
                    Page::OtherAssets => view! { <OtherAssetsPage/> }.into_any(),
                    Page::Credentials => view! { <CredentialsPage/> }.into_any(),
                    Page::ManualEntry => view! { <ManualEntryPage/> }.into_any(),
                }}
            </main>
        </div>
    }
}
