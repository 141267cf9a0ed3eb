//! Runtime-effect dispatch for the desktop host boundary.

use crate::{
    host::{persistence_effects, DesktopHostContext},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::ScheduleTransition { ticket, delay_ms } => {
            host.schedule_transition(runtime, ticket, delay_ms);
        }
        RuntimeEffect::CancelTransition(ticket) => host.cancel_transition(&ticket),
        RuntimeEffect::FocusWindowInput(window_id) => host.focus_window_input(window_id),
        RuntimeEffect::PersistTheme => persistence_effects::persist_theme(&host, runtime),
        RuntimeEffect::PersistWallpaper => persistence_effects::persist_wallpaper(&host, runtime),
        RuntimeEffect::PersistIconLayout => {
            persistence_effects::persist_icon_layout(&host, runtime)
        }
        RuntimeEffect::ClearIconLayout => persistence_effects::clear_icon_layout(&host),
    }
}
