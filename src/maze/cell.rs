use crossterm::style::{Color, Stylize};

use std::fmt;

/// A cell of the rendered maze, which can be either a path or a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridCell {
    Path,
    Wall,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    fn symbol(&self) -> &'static str {
        match self {
            GridCell::Path => "  ",
            GridCell::Wall => "⬜",
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Path => self.symbol().with(Color::Reset),
            GridCell::Wall => self.symbol().with(Color::White),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_symbols_have_cell_width() {
        for cell in [GridCell::Path, GridCell::Wall] {
            assert_eq!(cell.symbol().width(), GridCell::CELL_WIDTH as usize);
        }
    }
}
