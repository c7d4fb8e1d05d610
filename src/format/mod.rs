//! Output formatters
//!
//! Four formatters are built once per bridge: HTML and LaTeX, each with and
//! without line numbers. Formatters replay a token stream into markup and
//! expose the style definitions the markup relies on.

mod html;
mod latex;

use serde::Deserialize;
use syntect::highlighting::Theme;

use crate::error::Result;
use crate::syntax::{TokenStream, Uncertain};

pub use html::{escape_html, HtmlFormatter};
pub use latex::{escape_verbatim, LatexFormatter};

/// Markup language a bridge renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    #[default]
    Html,
    Latex,
}

#[derive(Debug, Clone)]
pub enum Formatter {
    Html(HtmlFormatter),
    Latex(LatexFormatter),
}

impl Formatter {
    /// Render a token stream into markup
    pub fn format(&self, stream: &TokenStream) -> std::result::Result<String, Uncertain> {
        match self {
            Formatter::Html(f) => f.format(stream),
            Formatter::Latex(f) => Ok(f.format(stream)),
        }
    }

    /// Style definitions (CSS or LaTeX macros) for this formatter's markup
    pub fn style_defs(&self) -> &str {
        match self {
            Formatter::Html(f) => f.style_defs(),
            Formatter::Latex(f) => f.style_defs(),
        }
    }
}

/// The four formatters a bridge holds
#[derive(Debug, Clone)]
pub struct FormatterSet {
    html: [Formatter; 2],
    latex: [Formatter; 2],
}

impl FormatterSet {
    pub fn new(theme: &Theme) -> Result<Self> {
        Ok(Self {
            html: [
                Formatter::Html(HtmlFormatter::new(theme, false)?),
                Formatter::Html(HtmlFormatter::new(theme, true)?),
            ],
            latex: [
                Formatter::Latex(LatexFormatter::new(theme, false)),
                Formatter::Latex(LatexFormatter::new(theme, true)),
            ],
        })
    }

    pub fn get(&self, target: RenderTarget, line_numbers: bool) -> &Formatter {
        let pair = match target {
            RenderTarget::Html => &self.html,
            RenderTarget::Latex => &self.latex,
        };
        &pair[usize::from(line_numbers)]
    }
}
