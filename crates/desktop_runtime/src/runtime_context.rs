//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer containers, the runtime effect queue and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    apps, effect_executor,
    host::DesktopHostContext,
    icon_layout::{reduce_icon_layout, DesktopIconLayout, IconLayoutAction},
    launcher::{reduce_launcher, LauncherAction, LauncherState},
    model::{AppId, DesktopConfig, DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching actions.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Startup configuration the provider was mounted with.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive window registry.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize session state.
    pub interaction: RwSignal<InteractionState>,
    /// Desktop icon positions and selection.
    pub icon_layout: RwSignal<DesktopIconLayout>,
    /// Spotlight launcher state.
    pub launcher: RwSignal<LauncherState>,
    /// Queue of runtime effects emitted by reducers and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Window registry dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Icon layout dispatch callback.
    pub dispatch_icons: Callback<IconLayoutAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Dispatches an icon layout action.
    pub fn dispatch_icon_action(&self, action: IconLayoutAction) {
        self.dispatch_icons.call(action);
    }

    /// Applies a launcher action and opens the app it launches, if any.
    pub fn dispatch_launcher_action(&self, action: LauncherAction) {
        let mut launched = None;
        self.launcher
            .update(|launcher| launched = reduce_launcher(launcher, action));
        if let Some(app_id) = launched {
            self.open_app(app_id);
        }
    }

    /// Opens an app window, or surfaces the existing one.
    pub fn open_app(&self, app_id: AppId) {
        self.dispatch_action(DesktopAction::OpenWindow(apps::open_spec(app_id)));
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Startup configuration; defaults open the browser shortly after boot.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Host bundle override, mainly for embedding with a non-browser preference store.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(DesktopState::with_transitions(config.transitions));
    let interaction = create_rw_signal(InteractionState::default());
    let icon_layout = create_rw_signal(DesktopIconLayout::default());
    let launcher = create_rw_signal(LauncherState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| previous != &desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|previous| previous != &ui) {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let dispatch_icons = Callback::new(move |action: IconLayoutAction| {
        let mut layout = icon_layout.get_untracked();
        match reduce_icon_layout(&mut layout, action) {
            Ok(new_effects) => {
                if icon_layout.with_untracked(|previous| previous != &layout) {
                    icon_layout.set(layout);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("icon layout reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config: store_value(config.clone()),
        state,
        interaction,
        icon_layout,
        launcher,
        effects,
        dispatch,
        dispatch_icons,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    host.get_value().install_boot_hydration(runtime, &config);
    on_cleanup(move || host.with_value(|host| host.clear_transition_timers()));

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
