use std::time::Duration;

use leptos::{create_effect, logging, set_timeout, untrack};

use crate::{
    host::DesktopHostContext,
    icon_layout::IconLayoutAction,
    model::DesktopConfig,
    persistence,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_hydration(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    config: DesktopConfig,
) {
    create_effect(move |_| {
        untrack(|| {
            let prefs = host.prefs_store();
            let theme = persistence::load_theme(&*prefs);
            let wallpaper_id = persistence::load_wallpaper(&*prefs);
            runtime.dispatch_action(DesktopAction::HydrateAppearance {
                theme,
                wallpaper_id,
            });

            let overrides = persistence::load_icon_layout_overrides(&*prefs);
            logging::log!(
                "desktop boot: {} icon overrides via {} host",
                overrides.len(),
                host.host_strategy_name()
            );
            runtime.dispatch_icon_action(IconLayoutAction::HydrateOverrides { overrides });

            if let Some(app_id) = config.boot_app {
                set_timeout(
                    move || runtime.open_app(app_id),
                    Duration::from_millis(u64::from(config.boot_delay_ms)),
                );
            }
        });
    });
}
