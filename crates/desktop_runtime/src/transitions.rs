//! Generation-tagged bookkeeping for deferred close/minimize transitions.
//!
//! The reducer never waits. It marks a window with a [`PendingTransition`], hands the host a
//! [`TransitionTicket`] to fire later, and on completion applies the ticket only if the window
//! still carries the same marker.

use crate::model::{
    DesktopState, PendingTransition, TransitionKind, TransitionTicket, WindowId, WindowRecord,
};

/// Arms a transition on `window_id`, replacing any pending one.
///
/// Returns the new ticket and, when a different transition was pending, the ticket it replaced.
pub(crate) fn schedule(
    state: &mut DesktopState,
    window_id: &WindowId,
    kind: TransitionKind,
) -> Option<(TransitionTicket, Option<TransitionTicket>)> {
    let generation = state.next_transition_generation;
    let window = state.windows.iter_mut().find(|w| &w.id == window_id)?;
    let replaced = ticket_for(window);
    window.transition = Some(PendingTransition { kind, generation });
    state.next_transition_generation += 1;
    Some((
        TransitionTicket {
            window_id: window_id.clone(),
            kind,
            generation,
        },
        replaced,
    ))
}

/// Clears the pending transition on a window, returning its ticket for timer cancellation.
pub(crate) fn cancel(window: &mut WindowRecord) -> Option<TransitionTicket> {
    let ticket = ticket_for(window);
    window.transition = None;
    ticket
}

/// Ticket matching the window's current marker, if any.
pub(crate) fn ticket_for(window: &WindowRecord) -> Option<TransitionTicket> {
    window.transition.map(|pending| TransitionTicket {
        window_id: window.id.clone(),
        kind: pending.kind,
        generation: pending.generation,
    })
}

/// Whether `ticket` still describes the window's pending transition.
pub(crate) fn is_current(window: &WindowRecord, ticket: &TransitionTicket) -> bool {
    window.id == ticket.window_id
        && window.transition
            == Some(PendingTransition {
                kind: ticket.kind,
                generation: ticket.generation,
            })
}
