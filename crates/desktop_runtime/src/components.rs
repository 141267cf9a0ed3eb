//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod context_menu;
mod desktop_icon;
mod dock;
mod gesture;
mod menu_bar;
mod spotlight;
mod window;

use leptos::*;

use self::{
    boot_screen::BootScreen,
    context_menu::{DesktopContextMenu, DesktopContextMenuState},
    desktop_icon::DesktopIcon,
    dock::Dock,
    menu_bar::MenuBar,
    spotlight::Spotlight,
    window::DesktopWindow,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

use crate::{
    apps,
    icon_layout::IconLayoutAction,
    launcher::LauncherAction,
    model::Position,
    reducer::DesktopAction,
    shortcuts::{is_editable_target, resolve_shortcut, KeyChord, ShortcutCommand, ShortcutContext},
};

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Position {
    Position {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary-button presses only; secondary touches and right clicks never start gestures.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn run_shortcut(runtime: DesktopRuntimeContext, command: ShortcutCommand) {
    match command {
        ShortcutCommand::ToggleLauncher => {
            runtime.dispatch_launcher_action(LauncherAction::Toggle)
        }
        ShortcutCommand::CloseLauncher => runtime.dispatch_launcher_action(LauncherAction::Close),
        ShortcutCommand::CloseActiveWindow => {
            runtime.dispatch_action(DesktopAction::CloseActiveWindow)
        }
        ShortcutCommand::MinimizeActiveWindow => {
            runtime.dispatch_action(DesktopAction::MinimizeActiveWindow)
        }
    }
}

#[component]
/// Renders the full desktop shell UI: menu bar, icons, windows, dock and overlays.
///
/// The boot overlay sits on top while the desktop underneath mounts and hydrates.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let context_menu = create_rw_signal(None::<DesktopContextMenuState>);
    let boot_screen = runtime
        .config
        .with_value(|config| config.boot_screen.clone())
        .map(|sequence| view! { <BootScreen sequence=sequence /> });

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if ev.key() == "Escape" && context_menu.get_untracked().is_some() {
            ev.prevent_default();
            context_menu.set(None);
            return;
        }

        let context = ShortcutContext {
            default_prevented: ev.default_prevented(),
            editable_target: is_editable_target(&ev),
            launcher_open: runtime.launcher.with_untracked(|launcher| launcher.open),
        };
        if let Some(command) = resolve_shortcut(&KeyChord::from_event(&ev), context) {
            ev.prevent_default();
            run_shortcut(runtime, command);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let visible_window_ids = move || {
        state.with(|desktop| {
            desktop
                .windows
                .iter()
                .filter(|w| !w.is_minimized)
                .map(|w| w.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-theme=move || state.with(|desktop| desktop.theme.id())
            style=move || {
                state.with(|desktop| format!("background-image:url('/{}');", desktop.wallpaper_id))
            }
            on:pointerdown=move |_| {
                if context_menu.get_untracked().is_some() {
                    context_menu.set(None);
                }
            }
        >
            <MenuBar />
            <div
                class="desktop"
                on:pointerdown=move |_| {
                    runtime.dispatch_icon_action(IconLayoutAction::ClearSelection);
                }
                on:contextmenu=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    context_menu.set(Some(DesktopContextMenuState {
                        x: ev.client_x(),
                        y: ev.client_y(),
                    }));
                }
            >
                <div class="desktop-icons">
                    <For
                        each=move || apps::desktop_icon_apps()
                        key=|entry| entry.app_id
                        let:entry
                    >
                        <DesktopIcon app_id=entry.app_id />
                    </For>
                </div>
                <Show when=move || context_menu.get().is_some() fallback=|| ()>
                    <DesktopContextMenu menu=context_menu />
                </Show>
            </div>
            <div class="window-layer">
                <For each=visible_window_ids key=|window_id| window_id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Dock />
            <Spotlight />
            {boot_screen}
        </div>
    }
}
