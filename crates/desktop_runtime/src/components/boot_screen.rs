use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::boot_screen::{
    apply_boot_event, boot_line_prefix, boot_schedule, BootScreenState, BootSequence,
};

#[component]
/// Terminal-style startup overlay rendered above the already-mounted desktop.
pub(super) fn BootScreen(sequence: BootSequence) -> impl IntoView {
    let total = sequence.lines.len();
    let lines = store_value(sequence.lines.clone());
    let boot = create_rw_signal(BootScreenState::default());

    let mut handles: Vec<TimeoutHandle> = Vec::new();
    for (delay_ms, event) in boot_schedule(&sequence) {
        match set_timeout_with_handle(
            move || boot.update(|state| apply_boot_event(state, event)),
            Duration::from_millis(u64::from(delay_ms)),
        ) {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                logging::warn!("boot screen timer failed: {err:?}");
                boot.update(|state| apply_boot_event(state, event));
            }
        }
    }
    on_cleanup(move || {
        for handle in handles {
            handle.clear();
        }
    });

    let visible_lines = move || {
        let visible = boot.with(|state| state.visible_lines);
        lines.with_value(|lines| {
            lines
                .iter()
                .take(visible)
                .enumerate()
                .map(|(index, line)| {
                    let latest = index + 1 == visible;
                    view! {
                        <div class="boot-line" class:latest=latest>
                            <span class="boot-prefix">{boot_line_prefix(index)}</span>
                            <span class="boot-status">"OK"</span>
                            <span class="boot-message">{line.text.clone()}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || !boot.with(|state| state.finished) fallback=|| ()>
            <div
                class="boot-screen"
                class:fade-out=move || boot.with(|state| state.fading)
                role="status"
                aria-live="polite"
            >
                <div class="boot-content">
                    <div class="boot-logo">
                        <span class="boot-logo-icon" aria-hidden="true">"💻"</span>
                        <span class="boot-logo-text">"Portfolio OS"</span>
                    </div>
                    <div class="boot-terminal">
                        {visible_lines}
                        <Show when=move || boot.with(|state| state.shows_cursor(total)) fallback=|| ()>
                            <span class="boot-cursor">"_"</span>
                        </Show>
                    </div>
                    <div class="boot-progress">
                        <div
                            class="boot-progress-bar"
                            style=move || {
                                format!("width:{}%;", boot.with(|state| state.progress_percent(total)))
                            }
                        ></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
