//! Lexer selection
//!
//! `python` gets special handling: a block starting with `>>>` is an
//! interpreter session, anything else must pass the plausibility probe.
//! Every other tag goes through the registry.

use std::sync::Arc;

use log::debug;
use syntect::parsing::SyntaxSet;

use crate::error::Result;
use crate::probe::{probe_python, ParseOutcome};
use crate::syntax::{Lexer, LexerRegistry};

const PYTHON: &str = "python";
const CONSOLE: &str = "pycon";
const SESSION_PROMPT: &str = ">>>";

/// Which way a block should be rendered
#[derive(Debug, Clone)]
pub enum Selection {
    /// Highlight with this lexer
    Lexer(Arc<Lexer>),
    /// Show the block unhighlighted; carries the reason
    Unhighlighted(String),
}

impl Selection {
    pub fn lexer(&self) -> Option<&Lexer> {
        match self {
            Selection::Lexer(lexer) => Some(lexer.as_ref()),
            Selection::Unhighlighted(_) => None,
        }
    }
}

/// Choose a lexer for `source` tagged with `tag`.
///
/// Fails only when `tag` names no known language.
pub fn select_lexer(
    registry: &LexerRegistry,
    syntaxes: &SyntaxSet,
    tag: &str,
    source: &str,
) -> Result<Selection> {
    if tag != PYTHON {
        return registry.resolve(tag, syntaxes).map(Selection::Lexer);
    }

    if source.starts_with(SESSION_PROMPT) {
        return registry.resolve(CONSOLE, syntaxes).map(Selection::Lexer);
    }

    match probe_python(source) {
        ParseOutcome::Accepted => registry.resolve(PYTHON, syntaxes).map(Selection::Lexer),
        ParseOutcome::Rejected(reason) => {
            debug!("block tagged python does not parse: {}", reason);
            Ok(Selection::Unhighlighted(reason))
        }
    }
}
