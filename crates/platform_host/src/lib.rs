//! Typed host-domain contracts shared by the desktop runtime and the browser adapters.
//!
//! This crate is the API-first boundary for platform services the desktop shell depends on:
//! lightweight preference storage and wall-clock reads. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod time;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
pub use time::{unix_time_ms_now, ClockSnapshot};
