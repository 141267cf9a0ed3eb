//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The desktop shell only needs lightweight preference storage from the browser, backed by
//! `window.localStorage`. Non-wasm builds compile the same adapters as inert stand-ins so the
//! runtime can be unit tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
