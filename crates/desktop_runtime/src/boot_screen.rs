//! Boot screen message schedule shown over the desktop while it starts.
//!
//! The sequence is plain data so embedders can shorten or replace it. The component in
//! [`crate::components`] turns [`boot_schedule`] into timers and folds each fired event
//! through [`apply_boot_event`].

use serde::{Deserialize, Serialize};

pub const DEFAULT_BOOT_FADE_DELAY_MS: u32 = 2800;
pub const DEFAULT_BOOT_EXIT_DELAY_MS: u32 = 3500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootLine {
    pub text: String,
    /// Offset from boot start at which the line appears.
    pub delay_ms: u32,
}

impl BootLine {
    fn new(text: &str, delay_ms: u32) -> Self {
        Self {
            text: text.to_string(),
            delay_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootSequence {
    pub lines: Vec<BootLine>,
    /// Offset at which the screen starts fading out.
    pub fade_delay_ms: u32,
    /// Offset at which the screen is removed.
    pub exit_delay_ms: u32,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self {
            lines: vec![
                BootLine::new("Initializing system...", 0),
                BootLine::new("Loading kernel modules...", 300),
                BootLine::new("Starting portfolio services...", 600),
                BootLine::new("Mounting /home/guest...", 900),
                BootLine::new("Loading desktop components...", 1200),
                BootLine::new("Initializing WebAssembly runtime...", 1500),
                BootLine::new("Starting window manager...", 1800),
                BootLine::new("Loading desktop environment...", 2100),
                BootLine::new("System ready.", 2400),
            ],
            fade_delay_ms: DEFAULT_BOOT_FADE_DELAY_MS,
            exit_delay_ms: DEFAULT_BOOT_EXIT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Reveal the first `n` lines.
    RevealLines(usize),
    Fade,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootScreenState {
    pub visible_lines: usize,
    pub fading: bool,
    pub finished: bool,
}

impl BootScreenState {
    /// Progress bar fill in whole percent.
    pub fn progress_percent(&self, total_lines: usize) -> u32 {
        if total_lines == 0 {
            return 100;
        }
        (self.visible_lines.min(total_lines) * 100 / total_lines) as u32
    }

    pub fn shows_cursor(&self, total_lines: usize) -> bool {
        self.visible_lines < total_lines
    }
}

/// Timer plan for a sequence, ordered by delay.
///
/// Every line reveals everything up to and including itself, so a late timer never hides
/// earlier lines.
pub fn boot_schedule(sequence: &BootSequence) -> Vec<(u32, BootEvent)> {
    let mut schedule: Vec<(u32, BootEvent)> = sequence
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| (line.delay_ms, BootEvent::RevealLines(index + 1)))
        .collect();
    schedule.push((sequence.fade_delay_ms, BootEvent::Fade));
    schedule.push((
        sequence.exit_delay_ms.max(sequence.fade_delay_ms),
        BootEvent::Finish,
    ));
    schedule.sort_by_key(|(delay_ms, _)| *delay_ms);
    schedule
}

pub fn apply_boot_event(state: &mut BootScreenState, event: BootEvent) {
    match event {
        BootEvent::RevealLines(count) => state.visible_lines = state.visible_lines.max(count),
        BootEvent::Fade => state.fading = true,
        BootEvent::Finish => {
            state.fading = true;
            state.finished = true;
        }
    }
}

/// `[03]` style index shown before each line.
pub fn boot_line_prefix(index: usize) -> String {
    format!("[{index:02}]")
}
