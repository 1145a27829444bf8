//! Rendering surface contract and an in-memory text surface.
//!
//! Widgets paint onto a [`Surface`]: a rectangular grid of terminal cells with a
//! current style category and a mapping from local to global coordinates. The
//! host owns the real screen; [`TextSurface`] is a self-contained grid used by
//! `view()` and by tests.
//!
//! ```rust
//! use bubbletea_actionlist::surface::{Position, StyleCategory, Surface, TextSurface};
//!
//! let mut surface = TextSurface::new(8, 2).with_origin(Position::new(4, 10));
//! surface.apply_style(StyleCategory::ListItem);
//! surface.draw_text(0, 1, "hello");
//!
//! assert_eq!(surface.plain_line(1), "hello");
//! assert_eq!(
//!     surface.translate_to_global(Position::new(0, 1)),
//!     Position::new(4, 11)
//! );
//! ```

use crate::action_list::ListStyles;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A cell position: `column` counted from the left, `row` from the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based column.
    pub column: usize,
    /// Zero-based row.
    pub row: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns this position shifted by `origin`.
    pub const fn offset_by(self, origin: Position) -> Self {
        Self {
            column: self.column + origin.column,
            row: self.row + origin.row,
        }
    }
}

/// A size in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Theme categories a widget can request before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// An unselected list row, or any row while the list is unfocused.
    ListItem,
    /// The selected row of a focused list.
    ListItemSelected,
}

/// A paintable rectangular region supplied by the host.
pub trait Surface {
    /// Paintable columns.
    fn width(&self) -> usize;

    /// Paintable rows.
    fn height(&self) -> usize;

    /// Selects the style used by subsequent [`Surface::draw_text`] calls.
    fn apply_style(&mut self, category: StyleCategory);

    /// Draws `text` starting at the given local cell. Text past the right edge is clipped.
    fn draw_text(&mut self, column: usize, row: usize, text: &str);

    /// Maps a local position to the host's global coordinate space.
    fn translate_to_global(&self, local: Position) -> Position;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    // Empty for the trailing half of a wide grapheme.
    symbol: String,
    category: Option<StyleCategory>,
}

impl Cell {
    fn blank() -> Self {
        Self {
            symbol: " ".to_string(),
            category: None,
        }
    }
}

// Makes `column` the start of a cell by blanking any wide grapheme that
// straddles it, so a partial overwrite never leaves half a glyph behind.
fn split_wide_at(cells: &mut [Cell], column: usize) {
    if !cells.get(column).is_some_and(|cell| cell.symbol.is_empty()) {
        return;
    }
    let mut lead = column;
    while lead > 0 && cells[lead].symbol.is_empty() {
        lead -= 1;
    }
    let mut end = column;
    while end < cells.len() && cells[end].symbol.is_empty() {
        end += 1;
    }
    for cell in &mut cells[lead..end] {
        cell.symbol = " ".to_string();
    }
}

/// An in-memory [`Surface`] backed by a cell grid.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: usize,
    height: usize,
    origin: Position,
    current: StyleCategory,
    styles: ListStyles,
    cells: Vec<Vec<Cell>>,
}

impl TextSurface {
    /// Creates a blank surface of `width × height` cells at global origin `(0, 0)`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            origin: Position::default(),
            current: StyleCategory::ListItem,
            styles: ListStyles::default(),
            cells: vec![vec![Cell::blank(); width]; height],
        }
    }

    /// Places the surface at `origin` in global coordinates.
    pub fn with_origin(mut self, origin: Position) -> Self {
        self.origin = origin;
        self
    }

    /// Uses `styles` when producing [`TextSurface::render`] output.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The surface size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The style category most recently applied.
    pub fn current_style(&self) -> StyleCategory {
        self.current
    }

    /// The style category a cell was last drawn with, `None` if never drawn.
    pub fn category_at(&self, column: usize, row: usize) -> Option<StyleCategory> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(|cell| cell.category)
    }

    /// Row contents without styling and without trailing blanks.
    ///
    /// Rows outside the surface yield an empty string.
    pub fn plain_line(&self, row: usize) -> String {
        match self.cells.get(row) {
            Some(cells) => {
                let line: String = cells.iter().map(|cell| cell.symbol.as_str()).collect();
                line.trim_end().to_string()
            }
            None => String::new(),
        }
    }

    /// Renders every row with its styles applied, rows joined by newlines.
    ///
    /// Consecutive cells sharing a category are styled as one run; cells that
    /// were never drawn are emitted as plain spaces.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|cells| self.render_row(cells))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_row(&self, cells: &[Cell]) -> String {
        let mut out = String::new();
        let mut run = String::new();
        let mut run_category: Option<StyleCategory> = None;

        for cell in cells {
            if cell.category != run_category && !run.is_empty() {
                out.push_str(&self.render_run(&run, run_category));
                run.clear();
            }
            run_category = cell.category;
            run.push_str(&cell.symbol);
        }
        if !run.is_empty() {
            out.push_str(&self.render_run(&run, run_category));
        }
        out
    }

    fn render_run(&self, text: &str, category: Option<StyleCategory>) -> String {
        match category {
            Some(category) => self.styles.style_for(category).render(text),
            None => text.to_string(),
        }
    }
}

impl Surface for TextSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn apply_style(&mut self, category: StyleCategory) {
        self.current = category;
    }

    fn draw_text(&mut self, column: usize, row: usize, text: &str) {
        let width = self.width;
        let category = Some(self.current);
        let Some(cells) = self.cells.get_mut(row) else {
            return;
        };

        let mut col = column;
        for grapheme in text.graphemes(true) {
            // Control characters would break the row apart when rendered.
            let grapheme = if grapheme.chars().any(char::is_control) {
                " "
            } else {
                grapheme
            };
            let cell_width = grapheme.width();
            if cell_width == 0 {
                continue;
            }
            if col + cell_width > width {
                break;
            }
            split_wide_at(cells, col);
            split_wide_at(cells, col + cell_width);
            cells[col] = Cell {
                symbol: grapheme.to_string(),
                category,
            };
            for cell in cells.iter_mut().skip(col + 1).take(cell_width - 1) {
                *cell = Cell {
                    symbol: String::new(),
                    category,
                };
            }
            col += cell_width;
        }
    }

    fn translate_to_global(&self, local: Position) -> Position {
        local.offset_by(self.origin)
    }
}
