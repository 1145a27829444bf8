//! Core types for the action list: items, actions and focus handoff results.

use std::fmt;

/// A row in an [`ActionListBox`](super::ActionListBox): a title and something to run.
///
/// Anything with these two capabilities can be stored in the list; there is
/// no base type to inherit from. Items are `Send` so the list can live inside
/// a bubbletea-rs `Model`.
///
/// # Examples
///
/// ```
/// use bubbletea_actionlist::action_list::ListItem;
///
/// struct Quit {
///     requested: bool,
/// }
///
/// impl ListItem for Quit {
///     fn title(&self) -> String {
///         "Quit".to_string()
///     }
///
///     fn activate(&mut self) {
///         self.requested = true;
///     }
/// }
/// ```
pub trait ListItem: Send {
    /// The label drawn for this row.
    fn title(&self) -> String;

    /// Runs the item's action. Called synchronously on the UI thread.
    fn activate(&mut self);
}

/// A named action that can be wrapped into a list item.
///
/// The `Display` output is used as the row title.
pub trait Action: fmt::Display + Send {
    /// Performs the action.
    fn activate(&mut self);
}

/// A list item backed by a title and a closure.
///
/// ```
/// use bubbletea_actionlist::action_list::{ActionItem, ListItem};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let mut item = ActionItem::new("Run", move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// item.activate();
/// assert_eq!(item.title(), "Run");
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
pub struct ActionItem {
    title: String,
    action: Box<dyn FnMut() + Send>,
}

impl ActionItem {
    /// Creates an item titled `title` that runs `action` when activated.
    pub fn new(title: impl Into<String>, action: impl FnMut() + Send + 'static) -> Self {
        Self {
            title: title.into(),
            action: Box::new(action),
        }
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl ListItem for ActionItem {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn activate(&mut self) {
        (self.action)();
    }
}

// Title is read from the action each time so it follows changes to its Display output.
pub(super) struct ActionAdapter<A: Action> {
    pub(super) action: A,
}

impl<A: Action> ListItem for ActionAdapter<A> {
    fn title(&self) -> String {
        self.action.to_string()
    }

    fn activate(&mut self) {
        self.action.activate();
    }
}

/// The direction keyboard focus was travelling when it arrived at a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusDirection {
    /// Moving down or forward through the layout.
    Forward,
    /// Moving up or backward through the layout.
    Backward,
    /// Moving sideways, or focus was assigned directly.
    Lateral,
}

/// What the host should do after a key event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationResult {
    /// Move focus to the next widget on the right (Tab, Right).
    FocusNextRight,
    /// Move focus to the previous widget on the left (BackTab, Left).
    FocusPreviousLeft,
    /// Move focus to the widget below; the list was already on its last row.
    FocusNextDown,
    /// Move focus to the widget above; the list was already on its first row.
    FocusPreviousUp,
    /// The key was handled, or ignored, by the list itself.
    Nothing,
}

impl NavigationResult {
    /// True when the list kept focus.
    pub fn is_handled(self) -> bool {
        self == NavigationResult::Nothing
    }

    /// The direction the widget receiving focus should be told it came from.
    ///
    /// ```
    /// use bubbletea_actionlist::action_list::{FocusDirection, NavigationResult};
    ///
    /// assert_eq!(
    ///     NavigationResult::FocusNextDown.entry_direction(),
    ///     Some(FocusDirection::Forward)
    /// );
    /// assert_eq!(NavigationResult::Nothing.entry_direction(), None);
    /// ```
    pub fn entry_direction(self) -> Option<FocusDirection> {
        match self {
            NavigationResult::FocusNextDown => Some(FocusDirection::Forward),
            NavigationResult::FocusPreviousUp => Some(FocusDirection::Backward),
            NavigationResult::FocusNextRight | NavigationResult::FocusPreviousLeft => {
                Some(FocusDirection::Lateral)
            }
            NavigationResult::Nothing => None,
        }
    }
}
