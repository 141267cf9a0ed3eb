use desktop_app_contract::{AppCommand, AppHost, AppMountContext};

use super::{gesture::GestureListeners, *};
use crate::model::{DesktopTheme, ResizeEdge, WindowId, WindowRecord};

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::East => "resize-e",
        ResizeEdge::South => "resize-s",
        ResizeEdge::SouthEast => "resize-se",
    }
}

fn window_class(win: &WindowRecord, active: bool) -> String {
    let mut class = String::from("window");
    for (flag, name) in [
        (active, " active"),
        (win.is_maximized, " maximized"),
        (win.is_closing(), " closing"),
        (win.is_minimizing(), " minimizing"),
    ] {
        if flag {
            class.push_str(name);
        }
    }
    class
}

fn window_style(win: &WindowRecord) -> String {
    if win.is_maximized {
        format!("z-index:{};", win.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
        )
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);
    let gesture = GestureListeners::new();

    let window = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| window_id.with_value(|id| desktop.window(id).cloned()))
    });
    let is_active = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| window_id.with_value(|id| desktop.is_active(id)))
    });

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow {
            window_id: window_id.get_value(),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: window_id.get_value(),
        });
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: window_id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
        if runtime
            .interaction
            .with_untracked(|ui| ui.dragging.is_some())
        {
            gesture.begin(
                move |pointer| runtime.dispatch_action(DesktopAction::UpdateMove { pointer }),
                move || runtime.dispatch_action(DesktopAction::EndMove),
            );
        }
    };
    let begin_resize = move |edge: ResizeEdge, ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
        if runtime
            .interaction
            .with_untracked(|ui| ui.resizing.is_some())
        {
            gesture.begin(
                move |pointer| runtime.dispatch_action(DesktopAction::UpdateResize { pointer }),
                move || runtime.dispatch_action(DesktopAction::EndResize),
            );
        }
    };

    // Control presses must never reach the title bar drag handler.
    let swallow_press = |ev: web_sys::PointerEvent| ev.stop_propagation();

    view! {
        <Show when=move || window.with(Option::is_some) fallback=|| ()>
            <section
                class=move || {
                    window
                        .with(|win| win.as_ref().map(|win| window_class(win, is_active.get())))
                        .unwrap_or_default()
                }
                style=move || window.with(|win| win.as_ref().map(window_style)).unwrap_or_default()
                role="dialog"
                aria-label=move || {
                    window.with(|win| win.as_ref().map(|win| win.title.clone())).unwrap_or_default()
                }
                on:pointerdown=focus
            >
                <header
                    class="window-titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=move |ev: web_sys::MouseEvent| toggle_maximize(ev)
                >
                    <div class="window-controls">
                        <button
                            class="window-control close"
                            aria-label="Close window"
                            on:pointerdown=swallow_press
                            on:dblclick=stop_mouse_event_owned
                            on:click=close
                        ></button>
                        <button
                            class="window-control minimize"
                            aria-label="Minimize window"
                            on:pointerdown=swallow_press
                            on:dblclick=stop_mouse_event_owned
                            on:click=minimize
                        ></button>
                        <button
                            class="window-control maximize"
                            aria-label=move || {
                                if window.with(|win| win.as_ref().is_some_and(|w| w.is_maximized)) {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=swallow_press
                            on:dblclick=stop_mouse_event_owned
                            on:click=toggle_maximize
                        ></button>
                    </div>
                    <div class="window-title">
                        <span class="window-title-icon" aria-hidden="true">
                            {move || window.with(|win| win.as_ref().map(|w| w.icon.clone()))}
                        </span>
                        <span>{move || window.with(|win| win.as_ref().map(|w| w.title.clone()))}</span>
                    </div>
                </header>
                <div class="window-content">
                    <WindowBody window_id=window_id.get_value() />
                </div>
                <Show
                    when=move || window.with(|win| win.as_ref().is_some_and(|w| !w.is_maximized))
                    fallback=|| ()
                >
                    {[ResizeEdge::East, ResizeEdge::South, ResizeEdge::SouthEast]
                        .into_iter()
                        .map(|edge| {
                            view! {
                                <div
                                    class=format!("window-resize-handle {}", resize_edge_class(edge))
                                    aria-hidden="true"
                                    on:pointerdown=move |ev| begin_resize(edge, ev)
                                ></div>
                            }
                        })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

fn stop_mouse_event_owned(ev: web_sys::MouseEvent) {
    stop_mouse_event(&ev);
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let target = window_id.clone();
    let command_sender = Callback::new(move |command: AppCommand| match command {
        AppCommand::SetTheme { theme_id } => match DesktopTheme::from_id(&theme_id) {
            Some(theme) => runtime.dispatch_action(DesktopAction::SetTheme { theme }),
            None => logging::warn!("app requested unknown theme `{theme_id}`"),
        },
        AppCommand::SetWallpaper { wallpaper_id } => {
            runtime.dispatch_action(DesktopAction::SetWallpaper { wallpaper_id });
        }
        AppCommand::CloseWindow => runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: target.clone(),
        }),
    });
    let host = AppHost::new(
        command_sender,
        Signal::derive(move || state.with(|desktop| desktop.theme.id().to_string())),
        Signal::derive(move || state.with(|desktop| desktop.wallpaper_id.clone())),
    );

    // Content is resolved once per mount; the hosted app id never changes for a window.
    let contents = state
        .with_untracked(|desktop| desktop.window(&window_id).map(|w| w.content))
        .map(|app_id| {
            apps::app_module(app_id).mount(AppMountContext {
                window_id: window_id.to_string(),
                host,
            })
        })
        .unwrap_or_else(|| ().into_view());

    view! { <div class="window-content-inner">{contents}</div> }
}
