//! Pages
//!
//! Per-entity page modules wired into the app shell.

mod credentials;
mod manual_entry;
mod other_assets;

pub use credentials::CredentialsPage;
pub use manual_entry::ManualEntryPage;
pub use other_assets::OtherAssetsPage;
