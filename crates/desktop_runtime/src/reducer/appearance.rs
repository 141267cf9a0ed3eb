//! Reducer helpers for desktop theme and wallpaper transitions.

use crate::{
    model::{wallpaper_preset, DesktopState, DEFAULT_WALLPAPER_ID},
    reducer::{DesktopAction, ReducerError, RuntimeEffect},
};

pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    match action {
        DesktopAction::SetTheme { theme } => {
            state.theme = *theme;
            effects.push(RuntimeEffect::PersistTheme);
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            let preset = wallpaper_preset(wallpaper_id)
                .ok_or_else(|| ReducerError::UnknownWallpaper(wallpaper_id.clone()))?;
            state.wallpaper_id = preset.id.to_string();
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HydrateAppearance {
            theme,
            wallpaper_id,
        } => {
            state.theme = *theme;
            state.wallpaper_id = wallpaper_preset(wallpaper_id)
                .map(|preset| preset.id)
                .unwrap_or(DEFAULT_WALLPAPER_ID)
                .to_string();
        }
        _ => return Ok(false),
    }

    Ok(true)
}
