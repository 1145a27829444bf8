//! Key handling and focus entry for the action list.
//!
//! Every key event produces exactly one [`NavigationResult`] and always marks
//! the list for redraw, whatever the key did.
//!
//! | Binding        | Default keys      | Effect                                                    |
//! |----------------|-------------------|-----------------------------------------------------------|
//! | `focus_next`   | Tab, →            | `FocusNextRight`, selection untouched                     |
//! | `focus_prev`   | Shift+Tab, ←      | `FocusPreviousLeft`, selection untouched                  |
//! | `cursor_down`  | ↓                 | next row, or `FocusNextDown` from the last row            |
//! | `cursor_up`    | ↑                 | previous row, or `FocusPreviousUp` from the first row     |
//! | `activate`     | Enter             | runs the selected item                                    |
//! | `go_to_end`    | PgDn              | last row                                                  |
//! | `go_to_start`  | PgUp              | first row                                                 |

use super::model::ActionListBox;
use super::types::{FocusDirection, NavigationResult};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyEvent;

impl ActionListBox {
    /// Interprets one key event.
    ///
    /// Returns [`NavigationResult::Nothing`] when the list handled or ignored
    /// the key, or a directive telling the host where focus should go next.
    pub fn handle_key(&mut self, key_event: &KeyEvent) -> NavigationResult {
        let before = self.selected;
        let result = self.interpret_key(key_event);
        self.invalidate();
        if self.selected != before {
            log::trace!(
                "action list selection moved {:?} -> {:?}",
                before,
                self.selected
            );
        }
        if !result.is_handled() {
            log::debug!("action list hands focus off: {:?}", result);
        }
        result
    }

    /// Same as [`ActionListBox::handle_key`], for a bubbletea-rs key message.
    pub fn handle_key_msg(&mut self, key_msg: &KeyMsg) -> NavigationResult {
        self.handle_key(&KeyEvent::new(key_msg.key, key_msg.modifiers))
    }

    /// Feeds a bubbletea-rs message to the list.
    ///
    /// Key messages are handled while the list is focused; anything else,
    /// or any message while unfocused, returns `None`.
    ///
    /// ```
    /// use bubbletea_actionlist::action_list::{ActionItem, ActionListBox, NavigationResult};
    /// use bubbletea_actionlist::Component;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut list = ActionListBox::new();
    /// list.add_item(ActionItem::new("Only", || {}));
    /// list.focus();
    ///
    /// let msg = Box::new(KeyMsg { key: KeyCode::Tab, modifiers: KeyModifiers::NONE });
    /// assert_eq!(list.update(msg), Some(NavigationResult::FocusNextRight));
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<NavigationResult> {
        if !self.focused {
            return None;
        }
        msg.downcast_ref::<KeyMsg>()
            .map(|key_msg| self.handle_key_msg(key_msg))
    }

    /// Called by the host when focus arrives from a neighbouring widget.
    ///
    /// Arriving forward selects the first item, arriving backward selects the
    /// last; a lateral arrival keeps the current selection. Always marks the
    /// list for redraw.
    pub fn on_focus_entered(&mut self, direction: FocusDirection) {
        self.invalidate();
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        match direction {
            FocusDirection::Forward => self.selected = Some(0),
            FocusDirection::Backward => self.selected = Some(last),
            FocusDirection::Lateral => return,
        }
        log::trace!(
            "action list entered {:?}, selection {:?}",
            direction,
            self.selected
        );
    }

    /// Gives the list focus and applies the entry policy for `direction`.
    pub fn focus_from(&mut self, direction: FocusDirection) -> Option<Cmd> {
        let cmd = self.focus();
        self.on_focus_entered(direction);
        cmd
    }

    fn interpret_key(&mut self, key_event: &KeyEvent) -> NavigationResult {
        let keymap = &self.keymap;
        let last = self.items.len().checked_sub(1);

        if keymap.focus_next.matches(key_event) {
            NavigationResult::FocusNextRight
        } else if keymap.focus_prev.matches(key_event) {
            NavigationResult::FocusPreviousLeft
        } else if keymap.cursor_down.matches(key_event) {
            match self.selected {
                Some(index) if Some(index) != last => {
                    self.selected = Some(index + 1);
                    NavigationResult::Nothing
                }
                _ => NavigationResult::FocusNextDown,
            }
        } else if keymap.cursor_up.matches(key_event) {
            match self.selected {
                Some(index) if index > 0 => {
                    self.selected = Some(index - 1);
                    NavigationResult::Nothing
                }
                _ => NavigationResult::FocusPreviousUp,
            }
        } else if keymap.activate.matches(key_event) {
            self.activate_selected();
            NavigationResult::Nothing
        } else if keymap.go_to_end.matches(key_event) {
            self.selected = last;
            NavigationResult::Nothing
        } else if keymap.go_to_start.matches(key_event) {
            if last.is_some() {
                self.selected = Some(0);
            }
            NavigationResult::Nothing
        } else {
            NavigationResult::Nothing
        }
    }

    fn activate_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        if let Some(item) = self.items.get_mut(index) {
            log::debug!("action list activating item {} ({})", index, item.title());
            item.activate();
        }
    }
}

impl Component for ActionListBox {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        self.invalidate();
        None
    }

    fn blur(&mut self) {
        self.focused = false;
        self.invalidate();
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
