//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! A hosted app is an opaque leaf: the runtime hands it the id of the window it lives in plus a
//! small command channel, and the app renders its own content. Apps never see window geometry.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, View};
use serde::{Deserialize, Serialize};

/// Shell-level requests an app may send to the runtime that hosts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppCommand {
    /// Switch the shell color theme by stable theme id (`dark`, `light`, `green`).
    SetTheme {
        /// Theme id.
        theme_id: String,
    },
    /// Switch the desktop wallpaper by asset id.
    SetWallpaper {
        /// Wallpaper asset id.
        wallpaper_id: String,
    },
    /// Close the window hosting the app.
    CloseWindow,
}

#[derive(Clone, Copy)]
/// Runtime handle given to an app for issuing [`AppCommand`] values and reading shell appearance.
pub struct AppHost {
    sender: Callback<AppCommand>,
    /// Current shell theme id.
    pub theme_id: Signal<String>,
    /// Current wallpaper asset id.
    pub wallpaper_id: Signal<String>,
}

impl AppHost {
    /// Creates a host handle from a command sender and appearance signals.
    pub fn new(
        sender: Callback<AppCommand>,
        theme_id: Signal<String>,
        wallpaper_id: Signal<String>,
    ) -> Self {
        Self {
            sender,
            theme_id,
            wallpaper_id,
        }
    }

    /// Sends a raw command to the runtime.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }

    /// Requests a theme change.
    pub fn set_theme(&self, theme_id: impl Into<String>) {
        self.send(AppCommand::SetTheme {
            theme_id: theme_id.into(),
        });
    }

    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, wallpaper_id: impl Into<String>) {
        self.send(AppCommand::SetWallpaper {
            wallpaper_id: wallpaper_id.into(),
        });
    }

    /// Requests that the hosting window close.
    pub fn close_window(&self) {
        self.send(AppCommand::CloseWindow);
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Opaque id of the hosting window.
    pub window_id: String,
    /// Runtime command channel.
    pub host: AppHost,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Renderable content handle stored per window and mounted by the window view.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// DOM id apps put on their primary text input so the runtime can focus it when the window opens.
pub fn window_primary_input_dom_id(window_id: &str) -> String {
    format!("window-primary-input-{window_id}")
}
