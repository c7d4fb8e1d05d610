//! The "friendly" style: dark keywords and muted blue strings on light grey

use crate::syntax::style::{Color, Style};
use crate::syntax::theme::StyleTable;
use crate::syntax::tokens::TokenType;

/// Create the friendly style table
pub fn friendly_style() -> StyleTable {
    let mut table = StyleTable::new("friendly", Color::rgb(0xf0, 0xf0, 0xf0));
    let fg = |r, g, b| Style::fg(Color::rgb(r, g, b));

    table.set(TokenType::Comment, fg(0x60, 0xa0, 0xb0).with_italic());
    table.set(TokenType::Preprocessor, fg(0x00, 0x70, 0x20));
    table.set(TokenType::Keyword, fg(0x00, 0x70, 0x20).with_bold());
    table.set(TokenType::KeywordType, fg(0x90, 0x20, 0x00));
    table.set(TokenType::Constant, fg(0x00, 0x70, 0x20).with_bold());
    table.set(TokenType::Operator, fg(0x66, 0x66, 0x66));
    table.set(TokenType::OperatorWord, fg(0x00, 0x70, 0x20).with_bold());
    table.set(TokenType::Builtin, fg(0x00, 0x70, 0x20));
    table.set(TokenType::Function, fg(0x06, 0x28, 0x7e));
    table.set(TokenType::Class, fg(0x0e, 0x84, 0xb5).with_bold());
    table.set(TokenType::Namespace, fg(0x0e, 0x84, 0xb5).with_bold());
    table.set(TokenType::Decorator, fg(0x55, 0x55, 0x55).with_bold());
    table.set(TokenType::Variable, fg(0xbb, 0x60, 0xd5));
    table.set(TokenType::Tag, fg(0x06, 0x28, 0x73).with_bold());
    table.set(TokenType::Attribute, fg(0x40, 0x70, 0xa0));
    table.set(TokenType::String, fg(0x40, 0x70, 0xa0));
    table.set(TokenType::Doc, fg(0x40, 0x70, 0xa0).with_italic());
    table.set(TokenType::Escape, fg(0x40, 0x70, 0xa0).with_bold());
    table.set(TokenType::Regex, fg(0x23, 0x53, 0x88));
    table.set(TokenType::Number, fg(0x40, 0xa0, 0x70));
    table.set(TokenType::Heading, fg(0x00, 0x00, 0x80).with_bold());
    table.set(TokenType::Emph, Style::default().with_italic());
    table.set(TokenType::Strong, Style::default().with_bold());
    table.set(TokenType::Prompt, fg(0xc6, 0x5d, 0x09).with_bold());
    table.set(TokenType::Output, fg(0x88, 0x88, 0x88));
    table.set(TokenType::Traceback, fg(0x00, 0x44, 0xdd));
    table.set(TokenType::Error, fg(0xff, 0x00, 0x00).with_underline());

    table
}
