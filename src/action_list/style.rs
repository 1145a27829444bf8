//! Styling for action list rows.
//!
//! Rows are drawn in one of two categories: [`StyleCategory::ListItem`] for
//! ordinary rows and [`StyleCategory::ListItemSelected`] for the highlighted
//! row of a focused list. `ListStyles` maps each category to a lipgloss style.
//!
//! ```rust
//! use bubbletea_actionlist::action_list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.selected_item = Style::new()
//!     .foreground(Color::from("#FFFFFF"))
//!     .background(Color::from("#7D56F4"));
//! ```

use crate::surface::StyleCategory;
use lipgloss_extras::prelude::*;

/// Appended to titles cut short to fit the available width.
///
/// Three cells wide, so a truncated title fills the width exactly.
pub const ELLIPSIS: &str = "...";

/// Styles for the two row categories.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Unselected rows, and every row while the list is unfocused.
    pub item: Style,
    /// The selected row while the list has focus.
    pub selected_item: Style,
}

impl ListStyles {
    /// The style for a category.
    pub fn style_for(&self, category: StyleCategory) -> &Style {
        match category {
            StyleCategory::ListItem => &self.item,
            StyleCategory::ListItemSelected => &self.selected_item,
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
        }
    }
}
