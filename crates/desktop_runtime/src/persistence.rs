//! Desktop preference persistence: icon layout overrides, theme and wallpaper.
//!
//! All values are JSON documents behind [`PrefsStore`]. Loads degrade to defaults on any failure;
//! only write failures are reported to callers.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};

use crate::{
    icon_layout::IconOverrides,
    model::{wallpaper_preset, DesktopTheme, DEFAULT_WALLPAPER_ID},
};

pub const ICON_POSITIONS_KEY: &str = "desktop-icon-positions";
pub const ICON_POSITIONS_VERSION_KEY: &str = "desktop-icon-positions-version";
/// Bumped whenever the default icon grid changes so stale overrides stop applying.
pub const ICON_POSITIONS_VERSION: u32 = 7;
pub const THEME_KEY: &str = "portfolio-theme";
pub const WALLPAPER_KEY: &str = "portfolio-wallpaper";

/// Loads icon position overrides, discarding them when the stored schema version is stale.
///
/// A stale or missing version tag removes the stored positions and records the current version.
pub fn load_icon_layout_overrides<S: PrefsStore + ?Sized>(store: &S) -> IconOverrides {
    let version = load_pref_with::<_, u32>(store, ICON_POSITIONS_VERSION_KEY).unwrap_or_else(|err| {
        logging::warn!("icon layout version unreadable: {err}");
        None
    });

    if version != Some(ICON_POSITIONS_VERSION) {
        if let Err(err) = reset_icon_layout_storage(store) {
            logging::warn!("icon layout migration failed: {err}");
        }
        return IconOverrides::new();
    }

    match load_pref_with::<_, IconOverrides>(store, ICON_POSITIONS_KEY) {
        Ok(overrides) => overrides.unwrap_or_default(),
        Err(err) => {
            logging::warn!("stored icon layout ignored: {err}");
            IconOverrides::new()
        }
    }
}

/// Writes the icon overrides along with the current schema version.
///
/// # Errors
///
/// Returns the first store failure.
pub fn persist_icon_layout<S: PrefsStore + ?Sized>(
    store: &S,
    overrides: &IconOverrides,
) -> Result<(), PrefsError> {
    save_pref_with(store, ICON_POSITIONS_KEY, overrides)?;
    save_pref_with(store, ICON_POSITIONS_VERSION_KEY, &ICON_POSITIONS_VERSION)
}

/// Removes stored icon positions and records the current schema version.
///
/// # Errors
///
/// Returns the first store failure.
pub fn reset_icon_layout_storage<S: PrefsStore + ?Sized>(store: &S) -> Result<(), PrefsError> {
    store.delete_pref(ICON_POSITIONS_KEY)?;
    save_pref_with(store, ICON_POSITIONS_VERSION_KEY, &ICON_POSITIONS_VERSION)
}

pub fn load_theme<S: PrefsStore + ?Sized>(store: &S) -> DesktopTheme {
    match load_pref_with::<_, DesktopTheme>(store, THEME_KEY) {
        Ok(theme) => theme.unwrap_or_default(),
        Err(err) => {
            logging::warn!("stored theme ignored: {err}");
            DesktopTheme::default()
        }
    }
}

/// Persists the theme.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub fn persist_theme<S: PrefsStore + ?Sized>(
    store: &S,
    theme: DesktopTheme,
) -> Result<(), PrefsError> {
    save_pref_with(store, THEME_KEY, &theme)
}

/// Loads the wallpaper id, falling back to the default for unknown presets.
pub fn load_wallpaper<S: PrefsStore + ?Sized>(store: &S) -> String {
    let stored = load_pref_with::<_, String>(store, WALLPAPER_KEY).unwrap_or_else(|err| {
        logging::warn!("stored wallpaper ignored: {err}");
        None
    });
    stored
        .as_deref()
        .and_then(wallpaper_preset)
        .map(|preset| preset.id)
        .unwrap_or(DEFAULT_WALLPAPER_ID)
        .to_string()
}

/// Persists the wallpaper id.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub fn persist_wallpaper<S: PrefsStore + ?Sized>(
    store: &S,
    wallpaper_id: &str,
) -> Result<(), PrefsError> {
    save_pref_with(store, WALLPAPER_KEY, wallpaper_id)
}
