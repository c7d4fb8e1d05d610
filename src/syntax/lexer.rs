//! Lexer handles
//!
//! A lexer is what a language tag resolves to: either a single syntax
//! definition or the interpreter-session lexer. A lexer can carry the
//! raise-on-error filter, which turns any token the tokenizer marked as
//! invalid into an `Uncertain` result.

use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::console::ConsoleLexer;
use super::stream::{self, TokenStream, Uncertain};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum LexerKind {
    /// Tokenize with one syntax definition
    Syntax(SyntaxReference),
    /// Interpreter session: prompts, code, output
    Console(ConsoleLexer),
}

#[derive(Debug, Clone)]
pub struct Lexer {
    tag: String,
    kind: LexerKind,
    raise_on_error: bool,
}

impl Lexer {
    /// Create a lexer backed by a syntax definition
    pub fn syntax(tag: &str, syntax: &SyntaxReference) -> Self {
        Self {
            tag: tag.to_string(),
            kind: LexerKind::Syntax(syntax.clone()),
            raise_on_error: false,
        }
    }

    /// Create an interpreter-session lexer delegating to `python`
    pub fn console(tag: &str, python: &SyntaxReference) -> Result<Self> {
        Ok(Self {
            tag: tag.to_string(),
            kind: LexerKind::Console(ConsoleLexer::new(python)?),
            raise_on_error: false,
        })
    }

    /// Builder: attach the raise-on-error filter
    pub fn with_raise_on_error(mut self) -> Self {
        self.raise_on_error = true;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_console(&self) -> bool {
        matches!(self.kind, LexerKind::Console(_))
    }

    pub fn raises_on_error(&self) -> bool {
        self.raise_on_error
    }

    /// Name of the syntax definition doing the tokenizing
    pub fn syntax_name(&self) -> &str {
        match &self.kind {
            LexerKind::Syntax(syntax) => &syntax.name,
            LexerKind::Console(console) => console.code_syntax(),
        }
    }

    /// Tokenize `source`, applying the raise-on-error filter if attached
    pub fn tokenize(
        &self,
        source: &str,
        syntaxes: &SyntaxSet,
    ) -> std::result::Result<TokenStream, Uncertain> {
        let stream = match &self.kind {
            LexerKind::Syntax(syntax) => stream::tokenize_lines(syntax, syntaxes, source)?,
            LexerKind::Console(console) => console.tokenize(source, syntaxes)?,
        };

        if self.raise_on_error {
            if let Some((line, scope)) = stream.first_error_token() {
                return Err(Uncertain(format!("{} on line {}", scope, line)));
            }
        }

        Ok(stream)
    }
}
