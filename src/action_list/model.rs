//! The `ActionListBox` struct, item storage and selection state.

use super::error::ListError;
use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{Action, ActionAdapter, ListItem};
use crate::surface::Position;

/// A vertical list of actionable rows that takes part in keyboard focus traversal.
///
/// Selection is `None` exactly when the list is empty; otherwise it is always
/// a valid row index. Keys move the selection or run the selected item, and
/// moving past either end of the list hands focus back to the host (see
/// [`ActionListBox::handle_key`]).
///
/// # Examples
///
/// ```
/// use bubbletea_actionlist::action_list::{ActionItem, ActionListBox, NavigationResult};
/// use crossterm::event::{KeyCode, KeyEvent};
///
/// let mut list = ActionListBox::new();
/// list.add_item(ActionItem::new("Open", || {}));
/// list.add_item(ActionItem::new("Save", || {}));
/// assert_eq!(list.selected_index(), Some(0));
///
/// let result = list.handle_key(&KeyEvent::from(KeyCode::Down));
/// assert_eq!(result, NavigationResult::Nothing);
/// assert_eq!(list.selected_index(), Some(1));
///
/// // Already on the last row: focus leaves downward.
/// let result = list.handle_key(&KeyEvent::from(KeyCode::Down));
/// assert_eq!(result, NavigationResult::FocusNextDown);
/// ```
pub struct ActionListBox {
    pub(super) items: Vec<Box<dyn ListItem>>,
    pub(super) selected: Option<usize>,
    pub(super) forced_width: Option<usize>,
    pub(super) focused: bool,
    pub(super) dirty: bool,
    pub(super) hotspot: Option<Position>,
    pub(super) keymap: ListKeyMap,
    pub(super) styles: ListStyles,
}

impl std::fmt::Debug for ActionListBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionListBox")
            .field("items", &self.titles())
            .field("selected", &self.selected)
            .field("forced_width", &self.forced_width)
            .field("focused", &self.focused)
            .field("dirty", &self.dirty)
            .field("hotspot", &self.hotspot)
            .finish_non_exhaustive()
    }
}

impl Default for ActionListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionListBox {
    /// Creates an empty list that sizes itself to its longest title.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            forced_width: None,
            focused: false,
            dirty: true,
            hotspot: None,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
        }
    }

    /// Creates an empty list that always asks for `width` columns once it has items.
    ///
    /// The width is fixed for the lifetime of the list.
    pub fn with_forced_width(width: usize) -> Self {
        Self {
            forced_width: Some(width),
            ..Self::new()
        }
    }

    /// Replaces the key bindings.
    pub fn with_key_map(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the row styles used by [`ActionListBox::view`].
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The forced width given at construction, if any.
    pub fn forced_width(&self) -> Option<usize> {
        self.forced_width
    }

    /// The active key bindings.
    pub fn key_map(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// The row styles.
    pub fn styles(&self) -> &ListStyles {
        &self.styles
    }

    /// Appends an item. The first item added becomes selected.
    pub fn add_item(&mut self, item: impl ListItem + 'static) {
        self.items.push(Box::new(item));
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.invalidate();
    }

    /// Appends an item titled with `action`'s `Display` output that runs the action.
    ///
    /// ```
    /// use bubbletea_actionlist::action_list::{Action, ActionListBox};
    /// use std::fmt;
    ///
    /// struct Refresh;
    ///
    /// impl fmt::Display for Refresh {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "Refresh")
    ///     }
    /// }
    ///
    /// impl Action for Refresh {
    ///     fn activate(&mut self) {}
    /// }
    ///
    /// let mut list = ActionListBox::new();
    /// list.add_action(Refresh);
    /// assert_eq!(list.get_item(0).unwrap().title(), "Refresh");
    /// ```
    pub fn add_action(&mut self, action: impl Action + 'static) {
        self.add_item(ActionAdapter { action });
    }

    /// Removes every item and clears the selection.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = None;
        self.invalidate();
    }

    /// The item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index >= item_count()`.
    pub fn get_item(&self, index: usize) -> Result<&(dyn ListItem + 'static), ListError> {
        let len = self.items.len();
        self.items
            .get(index)
            .map(|item| &**item)
            .ok_or(ListError::OutOfRange { index, len })
    }

    /// Mutable access to the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index >= item_count()`.
    pub fn get_item_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut (dyn ListItem + 'static), ListError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => Ok(&mut **item),
            None => Err(ListError::OutOfRange { index, len }),
        }
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Titles of all items, top to bottom.
    pub fn titles(&self) -> Vec<String> {
        self.items.iter().map(|item| item.title()).collect()
    }

    /// Index of the selected item; `None` only when the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item, if any.
    pub fn selected_item(&self) -> Option<&(dyn ListItem + 'static)> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(|item| &**item)
    }

    /// Selects `index`, clamped to the list.
    ///
    /// `None` selects the first item when the list has items, so a populated
    /// list cannot be deselected. Indices past the end select the last item.
    /// The list is marked for redraw even if the selection did not change.
    ///
    /// ```
    /// use bubbletea_actionlist::action_list::{ActionItem, ActionListBox};
    ///
    /// let mut list = ActionListBox::new();
    /// for title in ["a", "b", "c"] {
    ///     list.add_item(ActionItem::new(title, || {}));
    /// }
    ///
    /// list.set_selected_index(Some(99));
    /// assert_eq!(list.selected_index(), Some(2));
    ///
    /// list.set_selected_index(None);
    /// assert_eq!(list.selected_index(), Some(0));
    /// ```
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        let count = self.items.len();
        self.selected = match index {
            None if count > 0 => Some(0),
            None => None,
            Some(_) if count == 0 => None,
            Some(index) => Some(index.min(count - 1)),
        };
        log::trace!("action list selection set to {:?}", self.selected);
        self.invalidate();
    }

    /// True when the list has changed since it was last rendered.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Marks the list as needing a redraw.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Where the host should place its cursor, in global coordinates.
    ///
    /// `None` until the list has been rendered once.
    pub fn hotspot(&self) -> Option<Position> {
        self.hotspot
    }
}
