//! Unhighlighted rendering
//!
//! When no lexer can be trusted with a block, its text is escaped and
//! wrapped as-is: a `<pre>` block for HTML, a Verbatim environment with
//! `@[]` as command characters for LaTeX.

use crate::format::{escape_html, RenderTarget};

const LATEX_BEGIN: &str = "\\begin{Verbatim}[commandchars=@\\[\\]]\n";
const LATEX_END: &str = "\\end{Verbatim}\n";

// Placeholders from the private use area; they never reach the output
const AT_MARK: char = '\u{E000}';
const LB_MARK: char = '\u{E001}';
const RB_MARK: char = '\u{E002}';

/// Render `source` without highlighting
pub fn unhighlighted(target: RenderTarget, source: &str) -> String {
    match target {
        RenderTarget::Html => format!("<pre>{}</pre>\n", escape_html(source)),
        RenderTarget::Latex => format!("{}{}{}", LATEX_BEGIN, escape_tex(source), LATEX_END),
    }
}

/// Escape the `@[]` command characters.
///
/// The characters are first swapped for placeholders and only then for the
/// `@at[]`, `@lb[]`, `@rb[]` sequences, so the `@` and brackets the
/// sequences introduce are not escaped again.
pub fn escape_tex(text: &str) -> String {
    text.replace('@', &AT_MARK.to_string())
        .replace('[', &LB_MARK.to_string())
        .replace(']', &RB_MARK.to_string())
        .replace(AT_MARK, "@at[]")
        .replace(LB_MARK, "@lb[]")
        .replace(RB_MARK, "@rb[]")
}
