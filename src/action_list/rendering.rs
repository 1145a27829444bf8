//! Layout and painting for the action list.
//!
//! Each item occupies one row, drawn from column 0. Titles wider than the
//! surface are cut on a grapheme boundary and end in [`ELLIPSIS`], unless the
//! surface is three columns or narrower, in which case the surface clips them.

use super::model::ActionListBox;
use super::style::ELLIPSIS;
use crate::surface::{Position, Size, StyleCategory, Surface, TextSurface};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl ActionListBox {
    /// The size the list would like to be given.
    ///
    /// An empty list still asks for a single cell. Otherwise the height is the
    /// item count and the width is the forced width, or the widest title.
    ///
    /// ```
    /// use bubbletea_actionlist::action_list::{ActionItem, ActionListBox};
    /// use bubbletea_actionlist::surface::Size;
    ///
    /// let mut list = ActionListBox::new();
    /// assert_eq!(list.preferred_size(), Size::new(1, 1));
    ///
    /// list.add_item(ActionItem::new("Open", || {}));
    /// list.add_item(ActionItem::new("Save as", || {}));
    /// assert_eq!(list.preferred_size(), Size::new(7, 2));
    /// ```
    pub fn preferred_size(&self) -> Size {
        if self.items.is_empty() {
            return Size::new(1, 1);
        }
        let width = match self.forced_width {
            Some(width) => width,
            None => self
                .items
                .iter()
                .map(|item| item.title().width())
                .max()
                .unwrap_or(0),
        };
        Size::new(width, self.items.len())
    }

    /// Paints the list onto `surface` and updates the hotspot.
    ///
    /// The selected row uses [`StyleCategory::ListItemSelected`] only while the
    /// list has focus. Clears the redraw flag.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        let available = surface.width();
        for (row, item) in self.items.iter().enumerate() {
            let category = if self.focused && self.selected == Some(row) {
                StyleCategory::ListItemSelected
            } else {
                StyleCategory::ListItem
            };
            surface.apply_style(category);

            let title = item.title();
            surface.draw_text(0, row, &truncate_title(&title, available));
        }

        self.hotspot = Some(match self.selected {
            None => Position::new(0, 0),
            Some(row) => surface.translate_to_global(Position::new(0, row)),
        });
        self.dirty = false;
    }

    /// Renders the list `width` columns wide and returns the styled text.
    ///
    /// The height is taken from [`ActionListBox::preferred_size`].
    pub fn view(&mut self, width: usize) -> String {
        let height = self.preferred_size().height;
        let mut surface = TextSurface::new(width, height).with_styles(self.styles.clone());
        self.render(&mut surface);
        surface.render()
    }
}

/// Shortens `title` to fit `width` columns, ending it with [`ELLIPSIS`].
///
/// Titles that fit, and any title when `width` is 3 or less, are returned unchanged.
pub fn truncate_title(title: &str, width: usize) -> Cow<'_, str> {
    let ellipsis_width = ELLIPSIS.width();
    if title.width() <= width || width <= ellipsis_width {
        return Cow::Borrowed(title);
    }

    let budget = width - ellipsis_width;
    let mut used = 0;
    let mut out = String::with_capacity(width);
    for grapheme in title.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        used += grapheme_width;
        out.push_str(grapheme);
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}
