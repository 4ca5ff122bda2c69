//! UI Components
//!
//! Reusable Leptos components.

mod asset_page;
mod category_charts;
mod delete_confirm_button;
mod entity_modal;

pub use asset_page::{AssetPage, AssetPageConfig, EntityOps, EntityRenderers, OpFuture, ViewMode};
pub use category_charts::CategoryCharts;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_modal::EntityModal;
