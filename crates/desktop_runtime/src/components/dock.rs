use super::*;
use crate::model::WindowId;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Dock">
            {apps::dock_apps()
                .into_iter()
                .map(|entry| {
                    let app_id = entry.app_id;
                    let window_id = WindowId::from(app_id);
                    let is_open = move || state.with(|desktop| desktop.is_open(&window_id));
                    view! {
                        <button
                            type="button"
                            class="dock-item"
                            class:open=is_open.clone()
                            title=entry.title
                            aria-label=entry.title
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ActivateDockItem { app_id })
                            }
                        >
                            <span class="dock-item-icon" aria-hidden="true">{entry.icon}</span>
                            <Show when=is_open fallback=|| ()>
                                <span class="dock-indicator"></span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
