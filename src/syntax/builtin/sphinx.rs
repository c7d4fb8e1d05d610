//! The "sphinx" style
//!
//! Like friendly, but a bit darker to enhance contrast on the green
//! background.

use super::friendly::friendly_style;
use crate::syntax::style::{Color, Style};
use crate::syntax::theme::StyleTable;
use crate::syntax::tokens::TokenType;

/// Create the sphinx style table
pub fn sphinx_style() -> StyleTable {
    let mut table = friendly_style();
    table.name = "sphinx".to_string();
    table.background = Color::rgb(0xee, 0xff, 0xcc);

    table.set(TokenType::Output, Style::fg(Color::rgb(0x33, 0x33, 0x33)));
    table.set(TokenType::Comment, Style::fg(Color::rgb(0x40, 0x80, 0x90)).with_italic());
    table.set(TokenType::Number, Style::fg(Color::rgb(0x20, 0x80, 0x50)));

    table
}
