use super::{gesture::GestureListeners, *};
use crate::model::AppId;

#[component]
pub(super) fn DesktopIcon(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let layout = runtime.icon_layout;
    let descriptor = apps::app_descriptor(app_id);
    let icon_id = app_id.as_str();
    let gesture = GestureListeners::new();

    let position = move || layout.with(|layout| layout.position(icon_id).unwrap_or_default());
    let class = move || {
        layout.with(|layout| {
            let mut class = String::from("desktop-icon");
            if layout.is_selected(icon_id) {
                class.push_str(" selected");
            }
            if layout.is_dragging(icon_id) {
                class.push_str(" dragging");
            }
            class
        })
    };

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        if !is_primary_press(&ev) {
            runtime.dispatch_icon_action(IconLayoutAction::SelectIcon {
                icon_id: icon_id.to_string(),
            });
            return;
        }
        ev.prevent_default();
        runtime.dispatch_icon_action(IconLayoutAction::BeginIconDrag {
            icon_id: icon_id.to_string(),
            pointer: pointer_from_pointer_event(&ev),
        });
        gesture.begin(
            move |pointer| {
                runtime.dispatch_icon_action(IconLayoutAction::UpdateIconDrag { pointer })
            },
            move || runtime.dispatch_icon_action(IconLayoutAction::EndIconDrag),
        );
    };
    let on_dblclick = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if !layout.with_untracked(|layout| layout.is_dragging(icon_id)) {
            runtime.open_app(app_id);
        }
    };

    view! {
        <div
            class=class
            style=move || {
                let Position { x, y } = position();
                format!("left:{x}px;top:{y}px;")
            }
            on:pointerdown=on_pointerdown
            on:dblclick=on_dblclick
        >
            <div class="desktop-icon-image" aria-hidden="true">{descriptor.icon}</div>
            <div class="desktop-icon-title">{descriptor.desktop_icon_label}</div>
        </div>
    }
}
