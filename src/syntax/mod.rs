//! Syntax and styling module
//!
//! This module wraps the highlighting engine:
//! - Lexer handles and the tag registry
//! - Token streams and the raise-on-error filter
//! - Category styles and theme resolution

mod builtin;
mod console;
mod lexer;
mod registry;
mod stream;
mod style;
mod theme;
mod tokens;

use std::path::Path;

use log::debug;
use syntect::parsing::SyntaxSet;

use crate::error::{BridgeError, Result};

pub use builtin::STYLE_NAMES;
pub use console::ConsoleLexer;
pub use lexer::{Lexer, LexerKind};
pub use registry::{find_syntax, LexerRegistry};
pub use stream::{TokenLine, TokenStream, Uncertain};
pub use style::{Color, Style};
pub use theme::{resolve_theme, StyleTable};
pub use tokens::TokenType;

/// Load the bundled syntax definitions, plus any found in `extra_dir`
pub fn load_syntaxes(extra_dir: Option<&Path>) -> Result<SyntaxSet> {
    let bundled = SyntaxSet::load_defaults_newlines();
    let Some(dir) = extra_dir else {
        return Ok(bundled);
    };

    let mut builder = bundled.into_builder();
    builder
        .add_from_folder(dir, true)
        .map_err(|e| BridgeError::Syntax(format!("{}: {}", dir.display(), e)))?;
    let syntaxes = builder.build();
    debug!("loaded {} syntaxes including {}", syntaxes.syntaxes().len(), dir.display());
    Ok(syntaxes)
}
