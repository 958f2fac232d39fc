use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, StyledContent, Stylize},
};
use mazecarve::{Board, Symbol};

/// The width of each board symbol when printed, in character widths.
pub const CELL_WIDTH: usize = 2;

/// Styled glyph for one board symbol, either emoji blocks or plain ASCII.
pub fn styled(symbol: Symbol, ascii: bool) -> StyledContent<&'static str> {
    let styled_symbol = match (symbol, ascii) {
        (Symbol::Wall, false) => "⬜".with(Color::White),
        (Symbol::Path, false) => "🟨".with(Color::Yellow),
        (Symbol::Wall, true) => "##".with(Color::DarkGrey),
        (Symbol::Path, true) => "**".with(Color::Yellow),
        (Symbol::Empty, _) => "  ".with(Color::Reset),
    };

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            styled_symbol.content().width(),
            CELL_WIDTH,
            "Each symbol must occupy exactly two character widths."
        );
    }

    styled_symbol
}

/// Prints the whole board, one line per board row.
pub fn print_board<W: Write>(out: &mut W, board: &Board, ascii: bool) -> std::io::Result<()> {
    for row in board.rows() {
        for &symbol in row {
            queue!(out, style::PrintStyledContent(styled(symbol, ascii)))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}
