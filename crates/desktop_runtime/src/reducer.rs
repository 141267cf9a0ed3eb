//! Reducer actions, side-effect intents, and transition logic for the window registry.

mod appearance;

use thiserror::Error;

use crate::{
    apps,
    model::{
        AppId, DesktopState, DesktopTheme, DragSession, InteractionState, Position, ResizeEdge,
        ResizeSession, Size, TransitionKind, TransitionTicket, WindowId, WindowOpenSpec,
        WindowRecord,
    },
    transitions,
    window_manager::{
        drag_position, next_z_index, raise_and_activate, release_focus, resize_size, window_mut,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or surface the existing one with the same id.
    OpenWindow(WindowOpenSpec),
    /// Start the close transition for a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Start the minimize transition for a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Render a window over the full desktop viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Clear minimized/maximized flags and bring a window to the front.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Raise a visible window and make it active.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Overwrite a window position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: Position,
    },
    /// Overwrite a window size.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: Size,
    },
    /// Apply a deferred close/minimize once its delay elapsed.
    CompleteTransition {
        /// Ticket issued by [`RuntimeEffect::ScheduleTransition`].
        ticket: TransitionTicket,
    },
    /// Maximize, or restore when already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Close the keyboard-targeted window.
    CloseActiveWindow,
    /// Minimize the keyboard-targeted window.
    MinimizeActiveWindow,
    /// Dock click: restore, minimize or open depending on the app window state.
    ActivateDockItem {
        /// App pinned to the dock entry.
        app_id: AppId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: Position,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: Position,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Handle being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: Position,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: Position,
    },
    /// End the active window resize.
    EndResize,
    /// Switch the shell color theme.
    SetTheme {
        /// New theme.
        theme: DesktopTheme,
    },
    /// Switch the wallpaper preset.
    SetWallpaper {
        /// Wallpaper preset id.
        wallpaper_id: String,
    },
    /// Apply appearance preferences loaded at boot.
    HydrateAppearance {
        /// Stored theme.
        theme: DesktopTheme,
        /// Stored wallpaper id.
        wallpaper_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by reducers for the host layer to execute.
pub enum RuntimeEffect {
    /// Fire [`DesktopAction::CompleteTransition`] with `ticket` after `delay_ms`.
    ScheduleTransition {
        /// Ticket to hand back on completion.
        ticket: TransitionTicket,
        /// Delay before completion.
        delay_ms: u32,
    },
    /// Drop the timer armed for a superseded ticket.
    CancelTransition(TransitionTicket),
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(WindowId),
    /// Persist the current theme.
    PersistTheme,
    /// Persist the current wallpaper.
    PersistWallpaper,
    /// Persist desktop icon position overrides.
    PersistIconLayout,
    /// Remove stored desktop icon positions.
    ClearIconLayout,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// Minimized windows must be restored before they can take focus.
    #[error("window `{0}` is minimized")]
    WindowMinimized(WindowId),
    /// The desktop icon id is not part of the catalog.
    #[error("desktop icon `{0}` not found")]
    IconNotFound(String),
    /// The wallpaper id does not name a preset.
    #[error("unknown wallpaper `{0}`")]
    UnknownWallpaper(String),
}

/// Applies a [`DesktopAction`] to the window registry and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present, and [`ReducerError::WindowMinimized`] when focusing a minimized window. The state may
/// be partially updated on error; callers reduce against a copy and discard it.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if appearance::reduce_appearance_action(state, &action, &mut effects)? {
        return Ok(effects);
    }

    match action {
        DesktopAction::OpenWindow(spec) => open_window(state, spec, &mut effects),
        DesktopAction::CloseWindow { window_id } => {
            begin_transition(state, &window_id, TransitionKind::Closing, &mut effects)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            begin_transition(state, &window_id, TransitionKind::Minimizing, &mut effects)?;
        }
        DesktopAction::MaximizeWindow { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            window.is_maximized = true;
            window.is_minimized = false;
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore_window(state, &window_id, &mut effects)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            if find_window(state, &window_id)?.is_minimized {
                return Err(ReducerError::WindowMinimized(window_id));
            }
            raise_and_activate(state, &window_id);
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            find_window_mut(state, &window_id)?.position = position;
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            find_window_mut(state, &window_id)?.size = size;
        }
        DesktopAction::CompleteTransition { ticket } => complete_transition(state, &ticket),
        DesktopAction::ToggleMaximize { window_id } => {
            if find_window(state, &window_id)?.is_maximized {
                restore_window(state, &window_id, &mut effects)?;
            } else {
                find_window_mut(state, &window_id)?.is_maximized = true;
            }
        }
        DesktopAction::CloseActiveWindow => {
            if let Some(window_id) = state.keyboard_target() {
                begin_transition(state, &window_id, TransitionKind::Closing, &mut effects)?;
            }
        }
        DesktopAction::MinimizeActiveWindow => {
            if let Some(window_id) = state.keyboard_target() {
                begin_transition(state, &window_id, TransitionKind::Minimizing, &mut effects)?;
            }
        }
        DesktopAction::ActivateDockItem { app_id } => {
            let window_id = WindowId::from(app_id);
            let minimized = state.window(&window_id).map(|w| w.is_minimized);
            match minimized {
                Some(true) => restore_window(state, &window_id, &mut effects)?,
                Some(false) if state.is_active(&window_id) => {
                    begin_transition(state, &window_id, TransitionKind::Minimizing, &mut effects)?;
                }
                _ => open_window(state, apps::open_spec(app_id), &mut effects),
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = focus_for_gesture(state, &window_id)?;
            if !window.is_maximized {
                interaction.dragging = Some(DragSession {
                    offset: pointer.offset_from(window.position),
                    window_id,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                match window_mut(state, &session.window_id) {
                    Some(window) => window.position = drag_position(pointer, session.offset),
                    None => interaction.dragging = None,
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let window = focus_for_gesture(state, &window_id)?;
            if !window.is_maximized {
                interaction.resizing = Some(ResizeSession {
                    size_start: window.size,
                    window_id,
                    edge,
                    pointer_start: pointer,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                match window_mut(state, &session.window_id) {
                    Some(window) => {
                        window.size = resize_size(
                            session.size_start,
                            session.edge,
                            session.pointer_start,
                            pointer,
                            window.min_size,
                        );
                    }
                    None => interaction.resizing = None,
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::SetTheme { .. }
        | DesktopAction::SetWallpaper { .. }
        | DesktopAction::HydrateAppearance { .. } => {}
    }

    Ok(effects)
}

fn open_window(state: &mut DesktopState, spec: WindowOpenSpec, effects: &mut Vec<RuntimeEffect>) {
    let window_id = spec.id.clone();
    let z_index = next_z_index(state);
    match window_mut(state, &window_id) {
        Some(existing) => {
            existing.is_minimized = false;
            existing.z_index = z_index;
            if let Some(stale) = transitions::cancel(existing) {
                effects.push(RuntimeEffect::CancelTransition(stale));
            }
        }
        None => state.windows.push(WindowRecord::from_spec(spec, z_index)),
    }
    state.active_window_id = Some(window_id.clone());
    effects.push(RuntimeEffect::FocusWindowInput(window_id));
}

fn restore_window(
    state: &mut DesktopState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.is_minimized = false;
    window.is_maximized = false;
    if let Some(stale) = transitions::cancel(window) {
        effects.push(RuntimeEffect::CancelTransition(stale));
    }
    raise_and_activate(state, window_id);
    effects.push(RuntimeEffect::FocusWindowInput(window_id.clone()));
    Ok(())
}

fn begin_transition(
    state: &mut DesktopState,
    window_id: &WindowId,
    kind: TransitionKind,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    // A pending close always wins; minimizing a closing window would resurrect it.
    if kind == TransitionKind::Minimizing && find_window(state, window_id)?.is_closing() {
        return Ok(());
    }
    let (ticket, replaced) = transitions::schedule(state, window_id, kind)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    release_focus(state, window_id);
    if let Some(stale) = replaced {
        effects.push(RuntimeEffect::CancelTransition(stale));
    }
    effects.push(RuntimeEffect::ScheduleTransition {
        delay_ms: state.transitions.delay_ms(kind),
        ticket,
    });
    Ok(())
}

fn complete_transition(state: &mut DesktopState, ticket: &TransitionTicket) {
    let Some(index) = state
        .windows
        .iter()
        .position(|w| transitions::is_current(w, ticket))
    else {
        return;
    };

    match ticket.kind {
        TransitionKind::Closing => {
            state.windows.remove(index);
        }
        TransitionKind::Minimizing => {
            let window = &mut state.windows[index];
            window.is_minimized = true;
            window.transition = None;
        }
    }
    release_focus(state, &ticket.window_id);
}

/// Focuses the window a gesture starts on and returns a snapshot of its geometry.
fn focus_for_gesture(
    state: &mut DesktopState,
    window_id: &WindowId,
) -> Result<WindowRecord, ReducerError> {
    let window = find_window(state, window_id)?;
    if window.is_minimized {
        return Err(ReducerError::WindowMinimized(window_id.clone()));
    }
    raise_and_activate(state, window_id);
    find_window(state, window_id).cloned()
}

fn find_window<'a>(
    state: &'a DesktopState,
    window_id: &WindowId,
) -> Result<&'a WindowRecord, ReducerError> {
    state
        .window(window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    window_mut(state, window_id).ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PendingTransition, DEFAULT_CLOSE_DELAY_MS, DEFAULT_MINIMIZE_DELAY_MS};

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(apps::open_spec(app_id)),
        )
        .expect("open window");
        app_id.into()
    }

    fn scheduled_ticket(effects: &[RuntimeEffect]) -> TransitionTicket {
        effects
            .iter()
            .find_map(|effect| match effect {
                RuntimeEffect::ScheduleTransition { ticket, .. } => Some(ticket.clone()),
                _ => None,
            })
            .expect("transition scheduled")
    }

    fn record<'a>(state: &'a DesktopState, window_id: &WindowId) -> &'a WindowRecord {
        state.window(window_id).expect("window present")
    }

    #[test]
    fn open_window_assigns_increasing_z_and_focuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let paint = open(&mut state, &mut interaction, AppId::Paint);

        assert_eq!(record(&state, &notes).z_index, 101);
        assert_eq!(record(&state, &paint).z_index, 102);
        assert_eq!(state.active_window_id, Some(paint.clone()));
        assert_eq!(state.top_z_index, 102);
    }

    #[test]
    fn open_emits_focus_input_effect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(apps::open_spec(AppId::Terminal)),
        )
        .expect("open");
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowInput(AppId::Terminal.into())]
        );
    }

    #[test]
    fn reopening_existing_id_merges_into_one_record() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        for _ in 0..3 {
            open(&mut state, &mut interaction, AppId::Notes);
        }
        open(&mut state, &mut interaction, AppId::Music);
        open(&mut state, &mut interaction, AppId::Notes);

        let ids: HashSet<&WindowId> = state.windows.iter().map(|w| &w.id).collect();
        assert_eq!(ids.len(), state.windows.len());
        assert_eq!(state.windows.len(), 2);
        assert_eq!(record(&state, &notes).z_index, state.top_z_index);
    }

    #[test]
    fn reopening_minimized_window_restores_it_without_duplicate() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let ticket = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeWindow {
                    window_id: notes.clone(),
                },
            )
            .expect("minimize"),
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("complete");
        assert!(record(&state, &notes).is_minimized);
        let z_before = record(&state, &notes).z_index;

        open(&mut state, &mut interaction, AppId::Notes);

        assert_eq!(state.windows.len(), 1);
        assert!(!record(&state, &notes).is_minimized);
        assert!(record(&state, &notes).z_index > z_before);
        assert_eq!(state.active_window_id, Some(notes));
    }

    #[test]
    fn close_marks_window_and_clears_active_until_completion() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: notes.clone(),
            },
        )
        .expect("close");
        let ticket = scheduled_ticket(&effects);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleTransition {
                ticket: ticket.clone(),
                delay_ms: DEFAULT_CLOSE_DELAY_MS,
            }]
        );
        assert_eq!(state.active_window_id, None);
        assert!(record(&state, &notes).is_closing());
        assert_eq!(state.closing_window_ids(), vec![notes.clone()]);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("complete");
        assert!(state.window(&notes).is_none());
    }

    #[test]
    fn reopen_during_pending_close_keeps_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let ticket = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow {
                    window_id: notes.clone(),
                },
            )
            .expect("close"),
        );

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(apps::open_spec(AppId::Notes)),
        )
        .expect("reopen");
        assert!(effects.contains(&RuntimeEffect::CancelTransition(ticket.clone())));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("stale completion is ignored");
        assert!(state.window(&notes).is_some());
        assert_eq!(record(&state, &notes).transition, None);
        assert_eq!(state.active_window_id, Some(notes));
    }

    #[test]
    fn repeated_close_rearms_and_only_latest_ticket_removes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let close = DesktopAction::CloseWindow {
            window_id: notes.clone(),
        };

        let first =
            scheduled_ticket(&reduce_desktop(&mut state, &mut interaction, close.clone()).expect("close"));
        let effects = reduce_desktop(&mut state, &mut interaction, close).expect("close again");
        let second = scheduled_ticket(&effects);
        assert!(effects.contains(&RuntimeEffect::CancelTransition(first.clone())));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket: first },
        )
        .expect("stale");
        assert!(state.window(&notes).is_some());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket: second },
        )
        .expect("current");
        assert!(state.window(&notes).is_none());
    }

    #[test]
    fn minimize_then_restore_preserves_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let paint = open(&mut state, &mut interaction, AppId::Paint);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: paint.clone(),
                position: Position::new(42, 17),
            },
        )
        .expect("move");
        let before = record(&state, &paint).clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: paint.clone(),
            },
        )
        .expect("minimize");
        let ticket = scheduled_ticket(&effects);
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleTransition { delay_ms, .. }] if *delay_ms == DEFAULT_MINIMIZE_DELAY_MS
        ));
        assert!(record(&state, &paint).is_minimizing());
        assert!(!record(&state, &paint).is_minimized);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("complete");
        assert!(record(&state, &paint).is_minimized);
        assert_eq!(state.active_window_id, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                window_id: paint.clone(),
            },
        )
        .expect("restore");
        let after = record(&state, &paint);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert!(after.z_index > before.z_index);
        assert!(!after.is_minimized);
        assert_eq!(state.active_window_id, Some(paint));
    }

    #[test]
    fn focus_is_monotonic_and_refuses_minimized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let music = open(&mut state, &mut interaction, AppId::Music);

        let mut last = state.top_z_index;
        for window_id in [&notes, &music, &notes, &notes] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                },
            )
            .expect("focus");
            assert_eq!(record(&state, window_id).z_index, last + 1);
            last += 1;
        }

        state
            .windows
            .iter_mut()
            .for_each(|w| w.is_minimized = w.id == music);
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::FocusWindow {
                    window_id: music.clone(),
                },
            ),
            Err(ReducerError::WindowMinimized(music))
        );
    }

    #[test]
    fn missing_window_errors_name_the_id() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let ghost = WindowId::new("ghost");
        for action in [
            DesktopAction::CloseWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::MinimizeWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::MaximizeWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::RestoreWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::FocusWindow {
                window_id: ghost.clone(),
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::WindowNotFound(ghost.clone()))
            );
        }
        assert_eq!(state.top_z_index, 100);
    }

    #[test]
    fn maximize_keeps_geometry_and_unminimizes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let browser = open(&mut state, &mut interaction, AppId::Browser);
        state.windows[0].is_minimized = true;
        let before = record(&state, &browser).clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: browser.clone(),
            },
        )
        .expect("maximize");
        let after = record(&state, &browser);
        assert!(after.is_maximized);
        assert!(!after.is_minimized);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(after.z_index, before.z_index);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: browser.clone(),
            },
        )
        .expect("toggle back");
        assert!(!record(&state, &browser).is_maximized);
    }

    #[test]
    fn reopen_wins_over_pending_minimize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let ticket = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeWindow {
                    window_id: notes.clone(),
                },
            )
            .expect("minimize"),
        );
        open(&mut state, &mut interaction, AppId::Notes);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("stale");

        assert!(!record(&state, &notes).is_minimized);
        assert_eq!(state.active_window_id, Some(notes));
    }

    #[test]
    fn minimize_during_pending_close_leaves_the_close_armed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let close = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow {
                    window_id: notes.clone(),
                },
            )
            .expect("close"),
        );

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: notes.clone(),
            },
        )
        .expect("minimize");
        assert_eq!(effects, Vec::new());
        assert!(record(&state, &notes).is_closing());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket: close },
        )
        .expect("complete close");
        assert!(!state.is_open(&notes));
    }

    #[test]
    fn keyboard_close_targets_topmost_visible_when_nothing_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let calc = open(&mut state, &mut interaction, AppId::Calculator);
        state.active_window_id = None;

        let ticket = scheduled_ticket(
            &reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseActiveWindow)
                .expect("close active"),
        );
        assert_eq!(ticket.window_id, calc);

        // The closing window is skipped for the next keyboard target.
        let ticket = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeActiveWindow,
            )
            .expect("minimize active"),
        );
        assert_eq!(ticket.window_id, notes);
    }

    #[test]
    fn keyboard_actions_without_windows_are_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseActiveWindow),
            Ok(Vec::new())
        );
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn dock_restores_minimizes_or_opens() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let dock = |state: &mut DesktopState, interaction: &mut InteractionState| {
            reduce_desktop(
                state,
                interaction,
                DesktopAction::ActivateDockItem {
                    app_id: AppId::Music,
                },
            )
            .expect("dock")
        };
        let music = WindowId::from(AppId::Music);

        dock(&mut state, &mut interaction);
        assert_eq!(state.active_window_id, Some(music.clone()));

        let ticket = scheduled_ticket(&dock(&mut state, &mut interaction));
        assert_eq!(ticket.kind, TransitionKind::Minimizing);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("complete");
        assert!(record(&state, &music).is_minimized);

        dock(&mut state, &mut interaction);
        assert!(!record(&state, &music).is_minimized);
        assert_eq!(state.active_window_id, Some(music.clone()));

        open(&mut state, &mut interaction, AppId::Notes);
        dock(&mut state, &mut interaction);
        assert_eq!(state.active_window_id, Some(music));
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn drag_moves_window_with_clamp_and_ignores_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        open(&mut state, &mut interaction, AppId::Music);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: notes.clone(),
                pointer: Position::new(200, 90),
            },
        )
        .expect("begin");
        assert_eq!(state.active_window_id, Some(notes.clone()));
        assert_eq!(
            interaction.dragging,
            Some(DragSession {
                window_id: notes.clone(),
                offset: Position::new(50, 10),
            })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: Position::new(20, 400),
            },
        )
        .expect("update");
        assert_eq!(record(&state, &notes).position, Position::new(0, 390));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end");
        assert_eq!(interaction.dragging, None);

        find_window_mut(&mut state, &notes)
            .expect("notes")
            .is_maximized = true;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: notes.clone(),
                pointer: Position::new(10, 10),
            },
        )
        .expect("begin on maximized");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_honors_min_size_and_ends_silently_when_window_disappears() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let calc = open(&mut state, &mut interaction, AppId::Calculator);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: calc.clone(),
                edge: ResizeEdge::SouthEast,
                pointer: Position::new(670, 580),
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: Position::new(500, 700),
            },
        )
        .expect("update");
        assert_eq!(record(&state, &calc).size, Size::new(280, 620));

        state.windows.clear();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: Position::new(900, 900),
            },
        )
        .expect("missing window ends session");
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn completing_minimize_keeps_other_active_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let notes = open(&mut state, &mut interaction, AppId::Notes);
        let ticket = scheduled_ticket(
            &reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MinimizeWindow {
                    window_id: notes.clone(),
                },
            )
            .expect("minimize"),
        );
        let calc = open(&mut state, &mut interaction, AppId::Calculator);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CompleteTransition { ticket },
        )
        .expect("complete");

        assert_eq!(
            record(&state, &notes).transition,
            None::<PendingTransition>
        );
        assert!(record(&state, &notes).is_minimized);
        assert_eq!(state.active_window_id, Some(calc));
    }
}
