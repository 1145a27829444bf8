#![warn(missing_docs)]

//! # bubbletea-actionlist
//!
//! A focusable action list for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! An [`ActionListBox`] is a column of selectable rows, each bound to an action.
//! It takes part in keyboard focus traversal: arrow keys move the selection,
//! Enter runs the selected action, and moving past the first or last row (or
//! pressing Tab, Shift+Tab, Left or Right) returns a [`NavigationResult`]
//! asking the host to move focus to a neighbouring widget.
//!
//! ## Modules
//!
//! - [`action_list`]: the widget, its items, key map and styles
//! - [`surface`]: the rendering surface contract and an in-memory [`TextSurface`]
//! - [`key`]: key bindings with help text
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_actionlist::prelude::*;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut list = ActionListBox::new();
//! list.add_item(ActionItem::new("New game", || {}));
//! list.add_item(ActionItem::new("Quit", || {}));
//! list.focus();
//!
//! assert_eq!(list.handle_key(&KeyEvent::from(KeyCode::Up)), NavigationResult::FocusPreviousUp);
//! assert_eq!(list.handle_key(&KeyEvent::from(KeyCode::Down)), NavigationResult::Nothing);
//!
//! let output = list.view(20);
//! assert_eq!(output.lines().count(), 2);
//! ```
//!
//! ## Logging
//!
//! Focus handoffs and item activations are reported through the [`log`] facade
//! at `debug` level, selection changes at `trace`. No logger is installed.

pub mod action_list;
pub mod key;
pub mod surface;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive widgets.
///
/// ```rust
/// use bubbletea_actionlist::{ActionListBox, Component};
///
/// let mut list = ActionListBox::new();
/// assert!(!list.focused());
///
/// list.focus();
/// assert!(list.focused());
///
/// list.blur();
/// assert!(!list.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use action_list::{
    Action, ActionItem, ActionListBox, FocusDirection, ListError, ListItem, ListKeyMap,
    ListStyles, NavigationResult,
};
pub use surface::{Position, Size, StyleCategory, Surface, TextSurface};

/// Common imports.
///
/// ```rust
/// use bubbletea_actionlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::action_list::{
        Action, ActionItem, ActionListBox, FocusDirection, ListError, ListItem, ListKeyMap,
        ListStyles, NavigationResult,
    };
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap};
    pub use crate::surface::{Position, Size, StyleCategory, Surface, TextSurface};
    pub use crate::Component;
}
