//! Browser timers backing deferred window transitions.

use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use leptos::{leptos_dom::helpers::TimeoutHandle, logging, set_timeout_with_handle};

use crate::{
    model::TransitionTicket, reducer::DesktopAction, runtime_context::DesktopRuntimeContext,
};

/// Pending timeout handles keyed by the ticket they will complete.
#[derive(Clone, Default)]
pub(super) struct TransitionTimers {
    pending: Rc<RefCell<HashMap<TransitionTicket, TimeoutHandle>>>,
}

impl TransitionTimers {
    pub(super) fn schedule(
        &self,
        runtime: DesktopRuntimeContext,
        ticket: TransitionTicket,
        delay_ms: u32,
    ) {
        let pending = self.pending.clone();
        let fired = ticket.clone();
        let handle = set_timeout_with_handle(
            move || {
                pending.borrow_mut().remove(&fired);
                runtime.dispatch_action(DesktopAction::CompleteTransition { ticket: fired });
            },
            Duration::from_millis(u64::from(delay_ms)),
        );

        match handle {
            Ok(handle) => {
                if let Some(previous) = self.pending.borrow_mut().insert(ticket, handle) {
                    previous.clear();
                }
            }
            Err(err) => {
                logging::warn!("transition timer for `{}` failed: {err:?}", ticket.window_id);
                // No timer to wait on; finish the transition now.
                runtime.dispatch_action(DesktopAction::CompleteTransition { ticket });
            }
        }
    }

    pub(super) fn cancel(&self, ticket: &TransitionTicket) {
        if let Some(handle) = self.pending.borrow_mut().remove(ticket) {
            handle.clear();
        }
    }

    pub(super) fn clear_all(&self) {
        for (_, handle) in self.pending.borrow_mut().drain() {
            handle.clear();
        }
    }
}
