//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    OtherAssets,
    Credentials,
    ManualEntry,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::OtherAssets => "Other Assets",
            Page::Credentials => "Credentials",
            Page::ManualEntry => "Manual Entry",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown page - read
    pub page: ReadSignal<Page>,
    /// Currently shown page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the visible page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}
