//! Key bindings for action list navigation.
//!
//! ## Default Keys
//!
//! - **Leave sideways**: `tab`/`→` (next widget), `shift+tab`/`←` (previous widget)
//! - **Move**: `↑`, `↓`; pressing past either end hands focus to the neighbour
//! - **Jump**: `pgup` (first item), `pgdn` (last item)
//! - **Activate**: `enter`
//!
//! ```rust
//! use bubbletea_actionlist::action_list::ListKeyMap;
//! use bubbletea_actionlist::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let mut keymap = ListKeyMap::default();
//! keymap.activate = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
//!     .with_help("enter/space", "run");
//! assert_eq!(keymap.short_help().len(), 3);
//! ```

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Key bindings for an [`ActionListBox`](super::ActionListBox).
///
/// When a key appears in more than one binding, the first field in
/// declaration order wins.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Hand focus to the next widget on the right.
    pub focus_next: Binding,
    /// Hand focus to the previous widget on the left.
    pub focus_prev: Binding,
    /// Select the next item, or leave downward from the last one.
    pub cursor_down: Binding,
    /// Select the previous item, or leave upward from the first one.
    pub cursor_up: Binding,
    /// Run the selected item's action.
    pub activate: Binding,
    /// Jump to the last item.
    pub go_to_end: Binding,
    /// Jump to the first item.
    pub go_to_start: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            focus_next: Binding::new(vec![KeyCode::Tab, KeyCode::Right])
                .with_help("tab/→", "next"),
            focus_prev: Binding::new(vec![KeyCode::BackTab, KeyCode::Left])
                .with_help("shift+tab/←", "previous"),
            cursor_down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            cursor_up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            activate: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            go_to_end: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "last"),
            go_to_start: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "first"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.activate]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.activate, &self.focus_next, &self.focus_prev],
        ]
    }
}
