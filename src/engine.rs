//! Highlighting engine
//!
//! Everything the bridge needs from the highlighting library, loaded once:
//! the syntax definitions, the lexer registry and the four formatters.

use log::debug;
use syntect::highlighting::Theme;
use syntect::parsing::SyntaxSet;

use crate::error::Result;
use crate::format::{Formatter, FormatterSet, RenderTarget};
use crate::syntax::{Lexer, LexerRegistry};

/// Outcome of a highlight call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// Markup produced by the formatter
    Success(String),
    /// The tokenizer was unsure; carries the reason
    Uncertain(String),
}

pub struct Engine {
    syntaxes: SyntaxSet,
    registry: LexerRegistry,
    formatters: FormatterSet,
}

impl Engine {
    pub fn new(syntaxes: SyntaxSet, theme: &Theme) -> Result<Self> {
        let registry = LexerRegistry::seeded(&syntaxes)?;
        let formatters = FormatterSet::new(theme)?;
        debug!(
            "highlighting engine ready: {} syntaxes, {} seeded languages",
            syntaxes.syntaxes().len(),
            registry.len()
        );
        Ok(Self {
            syntaxes,
            registry,
            formatters,
        })
    }

    pub fn syntaxes(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    pub fn registry(&self) -> &LexerRegistry {
        &self.registry
    }

    pub fn formatter(&self, target: RenderTarget, line_numbers: bool) -> &Formatter {
        self.formatters.get(target, line_numbers)
    }

    /// Tokenize and format `source`
    pub fn highlight(
        &self,
        source: &str,
        lexer: &Lexer,
        formatter: &Formatter,
    ) -> HighlightOutcome {
        let stream = match lexer.tokenize(source, &self.syntaxes) {
            Ok(stream) => stream,
            Err(uncertain) => return HighlightOutcome::Uncertain(uncertain.0),
        };
        match formatter.format(&stream) {
            Ok(markup) => HighlightOutcome::Success(markup),
            Err(uncertain) => HighlightOutcome::Uncertain(uncertain.0),
        }
    }
}
