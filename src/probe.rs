//! Python plausibility probe
//!
//! Code blocks tagged `python` are often doctest fragments or partial
//! statements. Before trusting the Python lexer, the block is parsed as a
//! statement sequence; a block that does not parse is shown unhighlighted.
//!
//! Documentation elides code with `...`, so every `...` is swapped for a
//! placeholder identifier, and a line that starts with the placeholder has
//! the rest of the line commented out. Only the probe sees the rewrite; the
//! highlighter gets the original text.

use std::sync::LazyLock;

use regex::Regex;
use rustpython_parser::{ast, Parse};

/// Stands in for `...`; a valid bare identifier
pub const ELLIPSIS_MARK: &str = "__highlighting__ellipsis__";

static PLACEHOLDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?m)^(\s*){}(.)", ELLIPSIS_MARK)).unwrap());

/// Result of probing a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Parses as a sequence of statements
    Accepted,
    /// Does not parse; carries the parser's message
    Rejected(String),
}

/// Rewrite `source` into the text the parser sees
pub fn prepare_source(source: &str) -> String {
    let src = format!("{}\n", source).replace("...", ELLIPSIS_MARK);
    PLACEHOLDER_LINE
        .replace_all(&src, format!("${{1}}{}# ${{2}}", ELLIPSIS_MARK).as_str())
        .into_owned()
}

/// Check whether `source` is plausibly Python
pub fn probe_python(source: &str) -> ParseOutcome {
    let src = prepare_source(source);
    match ast::Suite::parse(&src, "<highlighting>") {
        Ok(_) => ParseOutcome::Accepted,
        Err(err) => ParseOutcome::Rejected(err.to_string()),
    }
}
