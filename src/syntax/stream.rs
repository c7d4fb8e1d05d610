//! Token streams produced by the tokenizer
//!
//! A stream keeps each source line together with the scope operations the
//! tokenizer emitted for it. Formatters replay the operations; the error
//! filter scans them for scopes the tokenizer marked as invalid.

use std::borrow::Cow;

use syntect::parsing::{ParseState, ScopeStackOp, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// The tokenizer could not classify the input confidently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uncertain(pub String);

/// One source line and its scope operations
#[derive(Debug, Clone)]
pub struct TokenLine {
    /// Line text, including its newline
    pub text: String,
    /// Byte offsets into `text` paired with scope operations
    pub ops: Vec<(usize, ScopeStackOp)>,
}

/// Tokenized source, line by line
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    lines: Vec<TokenLine>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TokenLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[TokenLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_mut(&mut self) -> Option<&mut TokenLine> {
        self.lines.last_mut()
    }

    /// Find the first error token (1-based line, scope name).
    ///
    /// Only `invalid` and `invalid.illegal.*` count; `invalid.deprecated.*`
    /// marks valid but discouraged code.
    pub fn first_error_token(&self) -> Option<(usize, String)> {
        self.lines.iter().enumerate().find_map(|(idx, line)| {
            line.ops.iter().find_map(|(_, op)| match op {
                ScopeStackOp::Push(scope) => {
                    let name = scope.build_string();
                    is_error_scope(&name).then(|| (idx + 1, name))
                }
                _ => None,
            })
        })
    }
}

fn is_error_scope(name: &str) -> bool {
    name == "invalid" || name == "invalid.illegal" || name.starts_with("invalid.illegal.")
}

/// Source text with a guaranteed trailing newline
pub fn with_trailing_newline(source: &str) -> Cow<'_, str> {
    if source.ends_with('\n') {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(format!("{}\n", source))
    }
}

/// Tokenize `source` with a single syntax definition
pub fn tokenize_lines(
    syntax: &SyntaxReference,
    syntaxes: &SyntaxSet,
    source: &str,
) -> Result<TokenStream, Uncertain> {
    let text = with_trailing_newline(source);
    let mut state = ParseState::new(syntax);
    let mut stream = TokenStream::new();

    for line in LinesWithEndings::from(&*text) {
        let ops = state
            .parse_line(line, syntaxes)
            .map_err(|e| Uncertain(e.to_string()))?;
        stream.push(TokenLine {
            text: line.to_string(),
            ops,
        });
    }

    Ok(stream)
}
