use super::*;
use crate::model::{AppId, DesktopTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DesktopContextMenuState {
    pub(super) x: i32,
    pub(super) y: i32,
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            logging::warn!("desktop refresh failed: {err:?}");
        }
    }
}

#[component]
pub(super) fn DesktopContextMenu(menu: RwSignal<Option<DesktopContextMenuState>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let position = move || {
        menu.get()
            .map(|menu| format!("left:{}px;top:{}px;", menu.x, menu.y))
            .unwrap_or_default()
    };

    let run = move |action: fn(DesktopRuntimeContext)| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            menu.set(None);
            action(runtime);
        }
    };

    view! {
        <div
            class="context-menu"
            role="menu"
            style=position
            on:pointerdown=|ev| ev.stop_propagation()
            on:contextmenu=|ev| stop_mouse_event(&ev)
        >
            <button type="button" role="menuitem" class="context-menu-item" on:click=run(|_| reload_page())>
                "Refresh"
            </button>
            <div class="context-menu-divider"></div>
            <button
                type="button"
                role="menuitem"
                class="context-menu-item"
                on:click=run(|runtime| runtime.dispatch_icon_action(IconLayoutAction::ResetLayout))
            >
                "Reset Icon Positions"
            </button>
            <button
                type="button"
                role="menuitem"
                class="context-menu-item"
                on:click=run(|runtime| runtime.dispatch_icon_action(IconLayoutAction::ResetLayout))
            >
                "Sort Icons by Name"
            </button>
            <div class="context-menu-divider"></div>
            {DesktopTheme::ALL
                .into_iter()
                .map(|theme| {
                    view! {
                        <button
                            type="button"
                            role="menuitemradio"
                            class="context-menu-item"
                            class:active=move || state.with(|desktop| desktop.theme == theme)
                            on:click=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                menu.set(None);
                                runtime.dispatch_action(DesktopAction::SetTheme { theme });
                            }
                        >
                            {format!("{} Theme", theme.label())}
                        </button>
                    }
                })
                .collect_view()}
            <div class="context-menu-divider"></div>
            <button
                type="button"
                role="menuitem"
                class="context-menu-item"
                on:click=run(|runtime| runtime.open_app(AppId::Settings))
            >
                "About This Portfolio"
            </button>
        </div>
    }
}
