//! Static app catalog: window defaults, desktop icon slots, dock pins and hosted content.

mod placeholders;

use desktop_app_contract::AppModule;

use crate::model::{AppId, Position, Size, WindowOpenSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub icon: &'static str,
    pub desktop_icon_label: &'static str,
    pub default_position: Position,
    pub default_size: Size,
    pub min_size: Size,
    /// Default desktop slot; `None` keeps the app off the desktop.
    pub desktop_icon_position: Option<Position>,
    pub show_in_launcher: bool,
}

const BROWSER: AppDescriptor = AppDescriptor {
    app_id: AppId::Browser,
    title: "Browser",
    icon: "🌐",
    desktop_icon_label: "Browser",
    default_position: Position::new(160, 10),
    default_size: Size::new(1200, 600),
    min_size: Size::new(400, 300),
    desktop_icon_position: Some(Position::new(24, 24)),
    show_in_launcher: true,
};

const TERMINAL: AppDescriptor = AppDescriptor {
    app_id: AppId::Terminal,
    title: "Terminal",
    icon: ">_",
    desktop_icon_label: "Terminal",
    default_position: Position::new(200, 100),
    default_size: Size::new(750, 480),
    min_size: Size::new(400, 250),
    desktop_icon_position: Some(Position::new(24, 124)),
    show_in_launcher: true,
};

const NOTES: AppDescriptor = AppDescriptor {
    app_id: AppId::Notes,
    title: "Notes",
    icon: "📝",
    desktop_icon_label: "Notes.txt",
    default_position: Position::new(150, 80),
    default_size: Size::new(550, 450),
    min_size: Size::new(300, 200),
    desktop_icon_position: Some(Position::new(24, 224)),
    show_in_launcher: true,
};

const MUSIC: AppDescriptor = AppDescriptor {
    app_id: AppId::Music,
    title: "Music",
    icon: "🎵",
    desktop_icon_label: "Music",
    default_position: Position::new(300, 60),
    default_size: Size::new(420, 650),
    min_size: Size::new(350, 500),
    desktop_icon_position: Some(Position::new(24, 324)),
    show_in_launcher: true,
};

const SNAKE: AppDescriptor = AppDescriptor {
    app_id: AppId::Snake,
    title: "Snake Game",
    icon: "🐍",
    desktop_icon_label: "Snake",
    default_position: Position::new(280, 50),
    default_size: Size::new(480, 680),
    min_size: Size::new(460, 600),
    desktop_icon_position: Some(Position::new(124, 24)),
    show_in_launcher: true,
};

const CALCULATOR: AppDescriptor = AppDescriptor {
    app_id: AppId::Calculator,
    title: "Calculator",
    icon: "🔢",
    desktop_icon_label: "Calculator",
    default_position: Position::new(350, 80),
    default_size: Size::new(320, 500),
    min_size: Size::new(280, 420),
    desktop_icon_position: Some(Position::new(124, 124)),
    show_in_launcher: true,
};

const SETTINGS: AppDescriptor = AppDescriptor {
    app_id: AppId::Settings,
    title: "Settings",
    icon: "⚙️",
    desktop_icon_label: "Settings",
    default_position: Position::new(220, 70),
    default_size: Size::new(800, 550),
    min_size: Size::new(500, 350),
    desktop_icon_position: Some(Position::new(124, 224)),
    show_in_launcher: true,
};

const CALENDAR: AppDescriptor = AppDescriptor {
    app_id: AppId::Calendar,
    title: "Calendar",
    icon: "📅",
    desktop_icon_label: "Calendar",
    default_position: Position::new(200, 70),
    default_size: Size::new(420, 650),
    min_size: Size::new(380, 520),
    desktop_icon_position: Some(Position::new(224, 24)),
    show_in_launcher: true,
};

const PAINT: AppDescriptor = AppDescriptor {
    app_id: AppId::Paint,
    title: "Paint",
    icon: "🎨",
    desktop_icon_label: "Paint",
    default_position: Position::new(150, 50),
    default_size: Size::new(900, 650),
    min_size: Size::new(600, 450),
    desktop_icon_position: Some(Position::new(224, 124)),
    show_in_launcher: true,
};

const PIANO: AppDescriptor = AppDescriptor {
    app_id: AppId::Piano,
    title: "Piano",
    icon: "🎹",
    desktop_icon_label: "Piano",
    default_position: Position::new(180, 60),
    default_size: Size::new(750, 450),
    min_size: Size::new(650, 380),
    desktop_icon_position: Some(Position::new(324, 24)),
    show_in_launcher: true,
};

const POMODORO: AppDescriptor = AppDescriptor {
    app_id: AppId::Pomodoro,
    title: "Pomodoro",
    icon: "⏱️",
    desktop_icon_label: "Pomodoro",
    default_position: Position::new(250, 80),
    default_size: Size::new(400, 580),
    min_size: Size::new(350, 500),
    desktop_icon_position: Some(Position::new(324, 124)),
    show_in_launcher: true,
};

const TIC_TAC_TOE: AppDescriptor = AppDescriptor {
    app_id: AppId::TicTacToe,
    title: "Tic Tac Toe",
    icon: "⭕",
    desktop_icon_label: "Tic Tac Toe",
    default_position: Position::new(260, 90),
    default_size: Size::new(380, 480),
    min_size: Size::new(320, 420),
    desktop_icon_position: Some(Position::new(424, 24)),
    show_in_launcher: true,
};

const APP_REGISTRY: [AppDescriptor; 12] = [
    BROWSER,
    TERMINAL,
    NOTES,
    MUSIC,
    SNAKE,
    CALCULATOR,
    SETTINGS,
    CALENDAR,
    PAINT,
    PIANO,
    POMODORO,
    TIC_TAC_TOE,
];

const DOCK_APPS: [AppId; 10] = [
    AppId::Browser,
    AppId::Terminal,
    AppId::Music,
    AppId::Calculator,
    AppId::Notes,
    AppId::Settings,
    AppId::Calendar,
    AppId::Paint,
    AppId::Piano,
    AppId::Pomodoro,
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    match app_id {
        AppId::Browser => &BROWSER,
        AppId::Terminal => &TERMINAL,
        AppId::Notes => &NOTES,
        AppId::Music => &MUSIC,
        AppId::Snake => &SNAKE,
        AppId::Calculator => &CALCULATOR,
        AppId::Settings => &SETTINGS,
        AppId::Calendar => &CALENDAR,
        AppId::Paint => &PAINT,
        AppId::Piano => &PIANO,
        AppId::Pomodoro => &POMODORO,
        AppId::TicTacToe => &TIC_TAC_TOE,
    }
}

/// Window spec used whenever an app is opened from an icon, the dock, the launcher or a deep link.
pub fn open_spec(app_id: AppId) -> WindowOpenSpec {
    let descriptor = app_descriptor(app_id);
    WindowOpenSpec {
        id: app_id.into(),
        title: descriptor.title.to_string(),
        icon: descriptor.icon.to_string(),
        position: descriptor.default_position,
        size: descriptor.default_size,
        min_size: descriptor.min_size,
        content: app_id,
    }
}

pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.desktop_icon_position.is_some())
        .collect()
}

pub fn dock_apps() -> Vec<AppDescriptor> {
    DOCK_APPS.into_iter().map(|id| *app_descriptor(id)).collect()
}

/// Resolves the hosted content module for a window's app.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Browser => AppModule::new(placeholders::mount_browser_app),
        AppId::Terminal => AppModule::new(placeholders::mount_terminal_app),
        AppId::Notes => AppModule::new(placeholders::mount_notes_app),
        AppId::Settings => AppModule::new(placeholders::mount_settings_app),
        AppId::Music
        | AppId::Snake
        | AppId::Calculator
        | AppId::Calendar
        | AppId::Paint
        | AppId::Piano
        | AppId::Pomodoro
        | AppId::TicTacToe => AppModule::new(placeholders::mount_generic_app),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_app_once_in_catalog_order() {
        let ids: Vec<AppId> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
    }

    #[test]
    fn open_spec_uses_app_id_as_window_id() {
        let spec = open_spec(AppId::Calculator);
        assert_eq!(spec.id.as_str(), "calculator");
        assert_eq!(spec.position, Position::new(350, 80));
        assert_eq!(spec.size, Size::new(320, 500));
        assert_eq!(spec.min_size, Size::new(280, 420));
        assert_eq!(spec.content, AppId::Calculator);
    }

    #[test]
    fn desktop_icon_slots_are_distinct() {
        let slots: HashSet<Position> = desktop_icon_apps()
            .iter()
            .filter_map(|entry| entry.desktop_icon_position)
            .collect();
        assert_eq!(slots.len(), desktop_icon_apps().len());
        assert_eq!(
            app_descriptor(AppId::Notes).desktop_icon_label,
            "Notes.txt"
        );
    }

    #[test]
    fn dock_pins_ten_apps_in_fixed_order() {
        let ids: Vec<&str> = dock_apps().iter().map(|entry| entry.app_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "browser",
                "terminal",
                "music",
                "calculator",
                "notes",
                "settings",
                "calendar",
                "paint",
                "piano",
                "pomodoro",
            ]
        );
    }
}
