use std::rc::Rc;

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use super::pointer_from_pointer_event;
use crate::model::Position;

/// Document-level pointer listeners that live for exactly one drag gesture.
#[derive(Clone, Copy)]
pub(super) struct GestureListeners {
    handles: StoredValue<Vec<WindowListenerHandle>>,
}

impl GestureListeners {
    pub(super) fn new() -> Self {
        let handles = store_value(Vec::<WindowListenerHandle>::new());
        let listeners = Self { handles };
        on_cleanup(move || listeners.release());
        listeners
    }

    /// Tracks pointer motion until release. Leftover listeners from an earlier gesture are dropped
    /// first.
    pub(super) fn begin(self, on_move: impl Fn(Position) + 'static, on_end: impl Fn() + 'static) {
        self.release();

        let on_end = Rc::new(on_end);
        let end_on_up = on_end.clone();
        let move_handle = window_event_listener(ev::pointermove, move |ev| {
            on_move(pointer_from_pointer_event(&ev));
        });
        let up_handle = window_event_listener(ev::pointerup, move |_| {
            self.release();
            end_on_up();
        });
        let cancel_handle = window_event_listener(ev::pointercancel, move |_| {
            self.release();
            on_end();
        });

        self.handles.update_value(|handles| {
            handles.extend([move_handle, up_handle, cancel_handle]);
        });
    }

    pub(super) fn release(self) {
        let handles = self
            .handles
            .try_update_value(std::mem::take)
            .unwrap_or_default();
        for handle in handles {
            handle.remove();
        }
    }
}
