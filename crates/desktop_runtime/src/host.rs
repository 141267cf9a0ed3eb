//! Host-side runtime helpers for executing reducer effects against browser services.
//!
//! Reducers stay pure; everything that touches storage, timers or the DOM runs here, behind a
//! host context that tests and embedders can build with their own [`PrefsStore`].

mod boot;
mod effects;
mod host_ui;
mod persistence_effects;
mod timers;

use std::rc::Rc;

use platform_host::PrefsStore;
use platform_host_web::{host_strategy_name, prefs_store};

use crate::{
    model::{DesktopConfig, TransitionTicket, WindowId},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    timers: timers::TransitionTimers,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(prefs_store()))
    }
}

impl DesktopHostContext {
    /// Builds a host context around a preference store.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            prefs,
            timers: timers::TransitionTimers::default(),
            host_strategy_name: host_strategy_name(),
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Hydrates appearance and icon layout from storage, then schedules the boot window.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext, config: &DesktopConfig) {
        boot::install_boot_hydration(self.clone(), runtime, config.clone());
    }

    /// Executes a single [`RuntimeEffect`] emitted by a reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Moves keyboard focus into the window's primary input, if the hosted app renders one.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    pub(crate) fn schedule_transition(
        &self,
        runtime: DesktopRuntimeContext,
        ticket: TransitionTicket,
        delay_ms: u32,
    ) {
        self.timers.schedule(runtime, ticket, delay_ms);
    }

    pub(crate) fn cancel_transition(&self, ticket: &TransitionTicket) {
        self.timers.cancel(ticket);
    }

    /// Clears every pending transition timer.
    pub fn clear_transition_timers(&self) {
        self.timers.clear_all();
    }
}
