use leptos::{logging, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_theme(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let theme = runtime.state.with_untracked(|state| state.theme);
    if let Err(err) = persistence::persist_theme(&*host.prefs, theme) {
        logging::warn!("persist theme failed: {err}");
    }
}

pub(super) fn persist_wallpaper(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let wallpaper_id = runtime
        .state
        .with_untracked(|state| state.wallpaper_id.clone());
    if let Err(err) = persistence::persist_wallpaper(&*host.prefs, &wallpaper_id) {
        logging::warn!("persist wallpaper failed: {err}");
    }
}

pub(super) fn persist_icon_layout(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let result = runtime
        .icon_layout
        .with_untracked(|layout| persistence::persist_icon_layout(&*host.prefs, &layout.overrides));
    if let Err(err) = result {
        logging::warn!("persist icon layout failed: {err}");
    }
}

pub(super) fn clear_icon_layout(host: &DesktopHostContext) {
    if let Err(err) = persistence::reset_icon_layout_storage(&*host.prefs) {
        logging::warn!("clear icon layout failed: {err}");
    }
}
