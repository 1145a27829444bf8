//! A focusable list of actions for keyboard-driven terminal layouts.
//!
//! [`ActionListBox`] stacks one row per item. The host feeds it key events and
//! focus-entry notifications and gets back a [`NavigationResult`] telling it
//! whether the list consumed the key or wants focus moved to a neighbour.
//!
//! ## Responsibilities
//!
//! - **Items**: an ordered store of [`ListItem`]s, appended one at a time or
//!   cleared in bulk. [`ActionItem`] wraps a closure; any [`Action`] can be
//!   added with [`ActionListBox::add_action`].
//! - **Selection**: `None` exactly when the list is empty, otherwise a valid
//!   row. Up/Down move within the list and hand focus off at either end, so a
//!   user can arrow through a column of widgets without an exit key.
//! - **Layout**: [`ActionListBox::preferred_size`] and
//!   [`ActionListBox::render`] onto any [`Surface`](crate::surface::Surface).
//!
//! ## Host loop
//!
//! ```
//! use bubbletea_actionlist::action_list::{ActionItem, ActionListBox, FocusDirection};
//! use bubbletea_actionlist::surface::{Position, TextSurface};
//! use crossterm::event::{KeyCode, KeyEvent};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let saved = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&saved);
//!
//! let mut list = ActionListBox::new();
//! list.add_item(ActionItem::new("Open", || {}));
//! list.add_item(ActionItem::new("Save", move || flag.store(true, Ordering::SeqCst)));
//!
//! // Focus arrives from the widget below.
//! list.focus_from(FocusDirection::Backward);
//! assert_eq!(list.selected_index(), Some(1));
//!
//! list.handle_key(&KeyEvent::from(KeyCode::Enter));
//! assert!(saved.load(Ordering::SeqCst));
//!
//! let mut surface = TextSurface::new(10, 2).with_origin(Position::new(3, 5));
//! list.render(&mut surface);
//! assert_eq!(surface.plain_line(1), "Save");
//! assert_eq!(list.hotspot(), Some(Position::new(3, 6)));
//! ```

pub mod keys;
pub mod style;

mod error;
mod model;
mod navigation;
mod rendering;
mod types;


pub use error::ListError;
pub use keys::ListKeyMap;
pub use model::ActionListBox;
pub use rendering::truncate_title;
pub use style::{ListStyles, ELLIPSIS};
pub use types::{Action, ActionItem, FocusDirection, ListItem, NavigationResult};
