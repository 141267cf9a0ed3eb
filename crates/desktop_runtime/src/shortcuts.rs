//! Document-level keyboard shortcut resolution.
//!
//! Resolution is pure so the precedence rules can be tested without a DOM; the shell feeds it a
//! [`KeyChord`] built from the browser event.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    fn primary_modifier(&self) -> bool {
        (self.ctrl || self.meta) && !self.alt
    }
}

/// What the document handler knows about the event beyond the keys pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortcutContext {
    /// A hosted app already handled the event.
    pub default_prevented: bool,
    /// The event originated in an input, textarea or contenteditable element.
    pub editable_target: bool,
    pub launcher_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCommand {
    ToggleLauncher,
    CloseLauncher,
    CloseActiveWindow,
    MinimizeActiveWindow,
}

pub fn resolve_shortcut(chord: &KeyChord, context: ShortcutContext) -> Option<ShortcutCommand> {
    if context.default_prevented {
        return None;
    }

    if chord.primary_modifier() {
        return match chord.key.as_str() {
            " " | "Spacebar" | "k" | "K" => Some(ShortcutCommand::ToggleLauncher),
            "m" | "M" if !context.editable_target => Some(ShortcutCommand::MinimizeActiveWindow),
            _ => None,
        };
    }

    if chord.key == "Escape" {
        if context.launcher_open {
            return Some(ShortcutCommand::CloseLauncher);
        }
        if !context.editable_target {
            return Some(ShortcutCommand::CloseActiveWindow);
        }
    }

    None
}

/// Whether the event target accepts text input.
pub fn is_editable_target(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };
    matches!(
        element.tag_name().to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    ) || element.is_content_editable()
}
