pub mod apps;
pub mod boot_screen;
pub mod components;
mod effect_executor;
pub mod host;
pub mod icon_layout;
pub mod launcher;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod shortcuts;
mod transitions;
pub mod window_manager;

pub use boot_screen::{BootLine, BootSequence};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use icon_layout::{reduce_icon_layout, DesktopIconLayout, IconLayoutAction};
pub use launcher::{reduce_launcher, LauncherAction, LauncherState};
pub use model::*;
pub use persistence::{
    load_icon_layout_overrides, load_theme, load_wallpaper, persist_icon_layout, persist_theme,
    persist_wallpaper, reset_icon_layout_storage,
};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
