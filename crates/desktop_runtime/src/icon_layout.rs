//! Desktop icon positions, selection and icon drag sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    apps,
    model::{AppId, Position},
    reducer::{ReducerError, RuntimeEffect},
    window_manager::drag_position,
};

/// Stored icon overrides, keyed by icon id.
pub type IconOverrides = BTreeMap<String, Position>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub icon_id: String,
    pub offset: Position,
    /// Live position while the pointer is down; written to the overrides on release.
    pub current: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopIconLayout {
    pub overrides: IconOverrides,
    #[serde(skip)]
    pub selected: Option<String>,
    #[serde(skip)]
    pub drag: Option<IconDragSession>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconLayoutAction {
    SelectIcon { icon_id: String },
    ClearSelection,
    BeginIconDrag { icon_id: String, pointer: Position },
    UpdateIconDrag { pointer: Position },
    EndIconDrag,
    ResetLayout,
    HydrateOverrides { overrides: IconOverrides },
}

/// Default slot for a desktop icon, if the id names an app shown on the desktop.
pub fn default_icon_position(icon_id: &str) -> Option<Position> {
    AppId::parse(icon_id).and_then(|app_id| apps::app_descriptor(app_id).desktop_icon_position)
}

impl DesktopIconLayout {
    /// Position to render for `icon_id`: the live drag position, then the override, then the
    /// catalog default.
    pub fn position(&self, icon_id: &str) -> Option<Position> {
        if let Some(drag) = self.drag.as_ref().filter(|drag| drag.icon_id == icon_id) {
            return Some(drag.current);
        }
        self.overrides
            .get(icon_id)
            .copied()
            .or_else(|| default_icon_position(icon_id))
    }

    pub fn is_selected(&self, icon_id: &str) -> bool {
        self.selected.as_deref() == Some(icon_id)
    }

    pub fn is_dragging(&self, icon_id: &str) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|drag| drag.icon_id == icon_id)
    }
}

fn known_icon(icon_id: &str) -> Result<Position, ReducerError> {
    default_icon_position(icon_id).ok_or_else(|| ReducerError::IconNotFound(icon_id.to_string()))
}

/// Applies an [`IconLayoutAction`] and returns persistence effects.
///
/// # Errors
///
/// Returns [`ReducerError::IconNotFound`] when selecting or dragging an id that has no desktop
/// icon.
pub fn reduce_icon_layout(
    layout: &mut DesktopIconLayout,
    action: IconLayoutAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        IconLayoutAction::SelectIcon { icon_id } => {
            known_icon(&icon_id)?;
            layout.selected = Some(icon_id);
        }
        IconLayoutAction::ClearSelection => {
            layout.selected = None;
        }
        IconLayoutAction::BeginIconDrag { icon_id, pointer } => {
            known_icon(&icon_id)?;
            let current = layout.position(&icon_id).unwrap_or_default();
            layout.selected = Some(icon_id.clone());
            layout.drag = Some(IconDragSession {
                offset: pointer.offset_from(current),
                icon_id,
                current,
            });
        }
        IconLayoutAction::UpdateIconDrag { pointer } => {
            if let Some(drag) = layout.drag.as_mut() {
                drag.current = drag_position(pointer, drag.offset);
            }
        }
        IconLayoutAction::EndIconDrag => {
            if let Some(drag) = layout.drag.take() {
                layout.overrides.insert(drag.icon_id, drag.current);
                effects.push(RuntimeEffect::PersistIconLayout);
            }
        }
        IconLayoutAction::ResetLayout => {
            layout.overrides.clear();
            layout.drag = None;
            effects.push(RuntimeEffect::ClearIconLayout);
        }
        IconLayoutAction::HydrateOverrides { overrides } => {
            layout.overrides = overrides
                .into_iter()
                .filter(|(icon_id, _)| default_icon_position(icon_id).is_some())
                .collect();
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn begin(layout: &mut DesktopIconLayout, icon_id: &str, pointer: Position) {
        reduce_icon_layout(
            layout,
            IconLayoutAction::BeginIconDrag {
                icon_id: icon_id.to_string(),
                pointer,
            },
        )
        .expect("begin drag");
    }

    #[test]
    fn drag_updates_live_position_and_persists_on_release() {
        let mut layout = DesktopIconLayout::default();
        begin(&mut layout, "terminal", Position::new(40, 140));
        assert!(layout.is_selected("terminal"));
        assert!(layout.is_dragging("terminal"));

        reduce_icon_layout(
            &mut layout,
            IconLayoutAction::UpdateIconDrag {
                pointer: Position::new(316, 410),
            },
        )
        .expect("update");
        assert_eq!(layout.position("terminal"), Some(Position::new(300, 394)));
        assert!(layout.overrides.is_empty());

        let effects = reduce_icon_layout(&mut layout, IconLayoutAction::EndIconDrag).expect("end");
        assert_eq!(effects, vec![RuntimeEffect::PersistIconLayout]);
        assert_eq!(
            layout.overrides.get("terminal"),
            Some(&Position::new(300, 394))
        );
        assert!(!layout.is_dragging("terminal"));
    }

    #[test]
    fn press_and_release_without_motion_still_writes_override() {
        let mut layout = DesktopIconLayout::default();
        begin(&mut layout, "notes", Position::new(30, 230));
        let effects = reduce_icon_layout(&mut layout, IconLayoutAction::EndIconDrag).expect("end");
        assert_eq!(effects, vec![RuntimeEffect::PersistIconLayout]);
        assert_eq!(layout.overrides.get("notes"), Some(&Position::new(24, 224)));
    }

    #[test]
    fn drag_clamps_to_desktop_origin() {
        let mut layout = DesktopIconLayout::default();
        begin(&mut layout, "browser", Position::new(34, 34));
        reduce_icon_layout(
            &mut layout,
            IconLayoutAction::UpdateIconDrag {
                pointer: Position::new(2, 5),
            },
        )
        .expect("update");
        assert_eq!(layout.position("browser"), Some(Position::new(0, 0)));
    }

    #[test]
    fn reset_clears_overrides_and_requests_storage_cleanup() {
        let mut layout = DesktopIconLayout::default();
        layout
            .overrides
            .insert("paint".to_string(), Position::new(500, 500));

        let effects = reduce_icon_layout(&mut layout, IconLayoutAction::ResetLayout).expect("reset");
        assert_eq!(effects, vec![RuntimeEffect::ClearIconLayout]);
        assert_eq!(layout.position("paint"), Some(Position::new(224, 124)));
    }

    #[test]
    fn hydration_drops_unknown_icons_and_unknown_select_errors() {
        let mut layout = DesktopIconLayout::default();
        let overrides = IconOverrides::from([
            ("music".to_string(), Position::new(600, 40)),
            ("gta6".to_string(), Position::new(424, 24)),
        ]);
        reduce_icon_layout(&mut layout, IconLayoutAction::HydrateOverrides { overrides })
            .expect("hydrate");
        assert_eq!(layout.overrides.len(), 1);
        assert_eq!(layout.position("music"), Some(Position::new(600, 40)));

        assert_eq!(
            reduce_icon_layout(
                &mut layout,
                IconLayoutAction::SelectIcon {
                    icon_id: "gta6".to_string(),
                },
            ),
            Err(ReducerError::IconNotFound("gta6".to_string()))
        );
        reduce_icon_layout(&mut layout, IconLayoutAction::ClearSelection).expect("clear");
        assert_eq!(layout.selected, None);
    }
}
