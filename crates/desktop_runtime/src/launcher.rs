//! Spotlight launcher state: query, filtered app list and keyboard cursor.

use crate::{
    apps::{self, AppDescriptor},
    model::AppId,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LauncherState {
    pub open: bool,
    pub query: String,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherAction {
    Open,
    Close,
    Toggle,
    SetQuery(String),
    SelectNext,
    SelectPrevious,
    /// Pointer entered the result row at `index`.
    Hover(usize),
    /// Enter key: launch the highlighted result.
    Activate,
    /// Click on the result row at `index`.
    ActivateAt(usize),
}

/// Case-insensitive title filter. A blank query keeps every entry in order.
pub fn filter_apps(entries: &[AppDescriptor], query: &str) -> Vec<AppDescriptor> {
    if query.trim().is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

impl LauncherState {
    pub fn results(&self) -> Vec<AppDescriptor> {
        filter_apps(&apps::launcher_apps(), &self.query)
    }

    fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }
}

/// Applies a [`LauncherAction`]. Returns the app to open when the action launches one; the
/// launcher closes itself in that case.
pub fn reduce_launcher(state: &mut LauncherState, action: LauncherAction) -> Option<AppId> {
    match action {
        LauncherAction::Open => {
            state.open = true;
            state.reset();
        }
        LauncherAction::Close => state.open = false,
        LauncherAction::Toggle => {
            if state.open {
                state.open = false;
            } else {
                state.open = true;
                state.reset();
            }
        }
        LauncherAction::SetQuery(query) => {
            state.query = query;
            state.selected = 0;
        }
        LauncherAction::SelectNext => {
            let count = state.results().len();
            if state.selected + 1 < count {
                state.selected += 1;
            }
        }
        LauncherAction::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        LauncherAction::Hover(index) => {
            if index < state.results().len() {
                state.selected = index;
            }
        }
        LauncherAction::Activate => {
            let index = state.selected;
            return launch(state, index);
        }
        LauncherAction::ActivateAt(index) => return launch(state, index),
    }
    None
}

fn launch(state: &mut LauncherState, index: usize) -> Option<AppId> {
    let app_id = state.results().get(index).map(|entry| entry.app_id)?;
    state.open = false;
    Some(app_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(state: &LauncherState) -> Vec<&'static str> {
        state.results().iter().map(|entry| entry.title).collect()
    }

    fn opened() -> LauncherState {
        let mut state = LauncherState::default();
        reduce_launcher(&mut state, LauncherAction::Open);
        state
    }

    #[test]
    fn blank_query_lists_every_launcher_app_in_order() {
        let mut state = opened();
        let all = apps::launcher_apps().len();
        assert_eq!(state.results().len(), all);

        reduce_launcher(&mut state, LauncherAction::SetQuery("   ".to_string()));
        assert_eq!(state.results().len(), all);
        assert_eq!(titles(&state)[0], "Browser");
    }

    #[test]
    fn query_matches_titles_case_insensitively() {
        let mut state = opened();
        reduce_launcher(&mut state, LauncherAction::SetQuery("CAL".to_string()));
        assert_eq!(titles(&state), vec!["Calculator", "Calendar"]);

        reduce_launcher(&mut state, LauncherAction::SetQuery("game".to_string()));
        assert_eq!(titles(&state), vec!["Snake Game"]);
    }

    #[test]
    fn cursor_clamps_and_resets_on_query_change() {
        let mut state = opened();
        reduce_launcher(&mut state, LauncherAction::SetQuery("cal".to_string()));
        for _ in 0..5 {
            reduce_launcher(&mut state, LauncherAction::SelectNext);
        }
        assert_eq!(state.selected, 1);
        for _ in 0..5 {
            reduce_launcher(&mut state, LauncherAction::SelectPrevious);
        }
        assert_eq!(state.selected, 0);

        reduce_launcher(&mut state, LauncherAction::Hover(1));
        assert_eq!(state.selected, 1);
        reduce_launcher(&mut state, LauncherAction::SetQuery("ca".to_string()));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn enter_launches_selection_and_closes() {
        let mut state = opened();
        reduce_launcher(&mut state, LauncherAction::SetQuery("cal".to_string()));
        reduce_launcher(&mut state, LauncherAction::SelectNext);

        assert_eq!(
            reduce_launcher(&mut state, LauncherAction::Activate),
            Some(AppId::Calendar)
        );
        assert!(!state.open);
    }

    #[test]
    fn enter_with_no_results_does_nothing() {
        let mut state = opened();
        reduce_launcher(&mut state, LauncherAction::SetQuery("zzz".to_string()));
        reduce_launcher(&mut state, LauncherAction::SelectNext);
        assert_eq!(state.selected, 0);

        assert_eq!(reduce_launcher(&mut state, LauncherAction::Activate), None);
        assert!(state.open);
    }

    #[test]
    fn reopening_resets_query_and_cursor() {
        let mut state = opened();
        reduce_launcher(&mut state, LauncherAction::SetQuery("pi".to_string()));
        reduce_launcher(&mut state, LauncherAction::Toggle);
        assert!(!state.open);

        reduce_launcher(&mut state, LauncherAction::Toggle);
        assert!(state.open);
        assert_eq!(state.query, "");
        assert_eq!(state.selected, 0);
    }
}
