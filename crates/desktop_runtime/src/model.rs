use std::fmt;

use serde::{Deserialize, Serialize};

use crate::boot_screen::BootSequence;

/// Stacking value handed out before the first window opens; the first window gets `101`.
pub const INITIAL_TOP_Z_INDEX: u32 = 100;
pub const DEFAULT_CLOSE_DELAY_MS: u32 = 200;
pub const DEFAULT_MINIMIZE_DELAY_MS: u32 = 300;
pub const DEFAULT_BOOT_DELAY_MS: u32 = 100;
pub const DEFAULT_WALLPAPER_ID: &str = "bg4.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Browser,
    Terminal,
    Notes,
    Music,
    Snake,
    Calculator,
    Settings,
    Calendar,
    Paint,
    Piano,
    Pomodoro,
    TicTacToe,
}

impl AppId {
    pub const ALL: [AppId; 12] = [
        Self::Browser,
        Self::Terminal,
        Self::Notes,
        Self::Music,
        Self::Snake,
        Self::Calculator,
        Self::Settings,
        Self::Calendar,
        Self::Paint,
        Self::Piano,
        Self::Pomodoro,
        Self::TicTacToe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Terminal => "terminal",
            Self::Notes => "notes",
            Self::Music => "music",
            Self::Snake => "snake",
            Self::Calculator => "calculator",
            Self::Settings => "settings",
            Self::Calendar => "calendar",
            Self::Paint => "paint",
            Self::Piano => "piano",
            Self::Pomodoro => "pomodoro",
            Self::TicTacToe => "tictactoe",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable window key. Windows are keyed by the id of the app they host, which is also the
/// correlation key used by desktop icons and dock entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AppId> for WindowId {
    fn from(app_id: AppId) -> Self {
        Self(app_id.as_str().to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub fn offset_from(self, origin: Position) -> Position {
        Position {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Everything needed to open (or surface) a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOpenSpec {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub content: AppId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Closing,
    Minimizing,
}

/// Deferred close/minimize recorded on a window while its exit animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub kind: TransitionKind,
    pub generation: u64,
}

/// Handle given to the host timer for a deferred transition.
///
/// A ticket only completes if the window still carries the same `(kind, generation)`; reopening,
/// restoring, or re-arming the transition makes older tickets stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket {
    pub window_id: WindowId,
    pub kind: TransitionKind,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub content: AppId,
    pub transition: Option<PendingTransition>,
}

impl WindowRecord {
    pub fn from_spec(spec: WindowOpenSpec, z_index: u32) -> Self {
        Self {
            id: spec.id,
            title: spec.title,
            icon: spec.icon,
            position: spec.position,
            size: spec.size,
            min_size: spec.min_size,
            is_minimized: false,
            is_maximized: false,
            z_index,
            content: spec.content,
            transition: None,
        }
    }

    pub fn is_closing(&self) -> bool {
        matches!(
            self.transition,
            Some(PendingTransition {
                kind: TransitionKind::Closing,
                ..
            })
        )
    }

    pub fn is_minimizing(&self) -> bool {
        matches!(
            self.transition,
            Some(PendingTransition {
                kind: TransitionKind::Minimizing,
                ..
            })
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    pub close_delay_ms: u32,
    pub minimize_delay_ms: u32,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            minimize_delay_ms: DEFAULT_MINIMIZE_DELAY_MS,
        }
    }
}

impl TransitionTimings {
    pub fn delay_ms(self, kind: TransitionKind) -> u32 {
        match kind {
            TransitionKind::Closing => self.close_delay_ms,
            TransitionKind::Minimizing => self.minimize_delay_ms,
        }
    }
}

/// Startup configuration for the desktop runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub transitions: TransitionTimings,
    /// App opened automatically after boot, unless a deep link names another one.
    pub boot_app: Option<AppId>,
    pub boot_delay_ms: u32,
    /// Boot overlay shown while the desktop mounts; `None` skips it.
    pub boot_screen: Option<BootSequence>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            transitions: TransitionTimings::default(),
            boot_app: Some(AppId::Browser),
            boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
            boot_screen: Some(BootSequence::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesktopTheme {
    #[default]
    Dark,
    Light,
    Green,
}

impl DesktopTheme {
    pub const ALL: [DesktopTheme; 3] = [Self::Dark, Self::Light, Self::Green];

    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Green => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Green => "Forest",
        }
    }

    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    pub id: &'static str,
    pub name: &'static str,
}

pub const WALLPAPER_PRESETS: [WallpaperPreset; 5] = [
    WallpaperPreset {
        id: "bg.png",
        name: "Sonoma",
    },
    WallpaperPreset {
        id: "bg2.jpg",
        name: "Ventura",
    },
    WallpaperPreset {
        id: "bg3.jpg",
        name: "Monterey",
    },
    WallpaperPreset {
        id: "bg4.png",
        name: "Sequoia",
    },
    WallpaperPreset {
        id: "bg5.jpg",
        name: "Catalina",
    },
];

pub fn wallpaper_preset(wallpaper_id: &str) -> Option<WallpaperPreset> {
    WALLPAPER_PRESETS
        .into_iter()
        .find(|preset| preset.id == wallpaper_id.trim())
}

/// The window registry: authoritative window list plus focus and stacking bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub top_z_index: u32,
    pub next_transition_generation: u64,
    pub transitions: TransitionTimings,
    pub theme: DesktopTheme,
    pub wallpaper_id: String,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            active_window_id: None,
            top_z_index: INITIAL_TOP_Z_INDEX,
            next_transition_generation: 1,
            transitions: TransitionTimings::default(),
            theme: DesktopTheme::default(),
            wallpaper_id: DEFAULT_WALLPAPER_ID.to_string(),
        }
    }
}

impl DesktopState {
    pub fn with_transitions(transitions: TransitionTimings) -> Self {
        Self {
            transitions,
            ..Self::default()
        }
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.window(window_id).is_some()
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_window_id.as_ref() == Some(window_id)
    }

    /// Highest-stacked window that is on screen and not animating out.
    pub fn topmost_visible_window(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized && w.transition.is_none())
            .max_by_key(|w| w.z_index)
    }

    /// Window targeted by keyboard shortcuts such as close/minimize-active.
    pub fn keyboard_target(&self) -> Option<WindowId> {
        self.active_window_id
            .clone()
            .or_else(|| self.topmost_visible_window().map(|w| w.id.clone()))
    }

    pub fn closing_window_ids(&self) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_closing())
            .map(|w| w.id.clone())
            .collect()
    }

    pub fn minimizing_window_ids(&self) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_minimizing())
            .map(|w| w.id.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window position at press time.
    pub offset: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: Position,
    pub size_start: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}
