//! LaTeX formatter: a fancyvrb Verbatim block with inline colour commands

use syntect::highlighting::{
    Color as EngineColor, FontStyle, HighlightIterator, HighlightState, Highlighter,
    Style as EngineStyle, Theme,
};
use syntect::parsing::ScopeStack;

use crate::syntax::TokenStream;

const BEGIN: &str = r"\begin{Verbatim}[commandchars=\\\{\}";
const NUMBERED: &str = ",numbers=left,firstnumber=1,stepnumber=1";
const END: &str = "\\end{Verbatim}\n";

const ESCAPE_DEFS: &str = concat!(
    r"\def\PYZbs{\char`\\}", "\n",
    r"\def\PYZob{\char`\{}", "\n",
    r"\def\PYZcb{\char`\}}", "\n",
);

#[derive(Debug, Clone)]
pub struct LatexFormatter {
    line_numbers: bool,
    theme: Theme,
    style_defs: String,
}

impl LatexFormatter {
    pub fn new(theme: &Theme, line_numbers: bool) -> Self {
        let mut style_defs = ESCAPE_DEFS.to_string();
        if let Some(bg) = theme.settings.background {
            style_defs.push_str(&format!("\\definecolor{{PYbg}}{{rgb}}{{{}}}\n", rgb(bg)));
        }
        Self {
            line_numbers,
            theme: theme.clone(),
            style_defs,
        }
    }

    pub fn style_defs(&self) -> &str {
        &self.style_defs
    }

    pub fn format(&self, stream: &TokenStream) -> String {
        let highlighter = Highlighter::new(&self.theme);
        let plain = self.theme.settings.foreground.unwrap_or(EngineColor::BLACK);
        let mut state = HighlightState::new(&highlighter, ScopeStack::new());

        let mut out = String::from(BEGIN);
        if self.line_numbers {
            out.push_str(NUMBERED);
        }
        out.push_str("]\n");

        for line in stream.lines() {
            let segments = HighlightIterator::new(&mut state, &line.ops, &line.text, &highlighter);
            for (style, text) in segments {
                write_segment(&mut out, &style, text, plain);
            }
        }

        out.push_str(END);
        out
    }
}

/// Write one styled segment. Commands never span a line break.
fn write_segment(out: &mut String, style: &EngineStyle, text: &str, plain: EngineColor) {
    for (idx, part) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        if part.is_empty() {
            continue;
        }

        let mut piece = escape_verbatim(part);
        if style.font_style.contains(FontStyle::UNDERLINE) {
            piece = format!("\\underline{{{}}}", piece);
        }
        if style.font_style.contains(FontStyle::ITALIC) {
            piece = format!("\\textit{{{}}}", piece);
        }
        if style.font_style.contains(FontStyle::BOLD) {
            piece = format!("\\textbf{{{}}}", piece);
        }
        if style.foreground != plain {
            piece = format!("\\textcolor[rgb]{{{}}}{{{}}}", rgb(style.foreground), piece);
        }
        out.push_str(&piece);
    }
}

fn rgb(color: EngineColor) -> String {
    let channel = |v: u8| f32::from(v) / 255.0;
    format!("{:.2},{:.2},{:.2}", channel(color.r), channel(color.g), channel(color.b))
}

/// Escape the Verbatim command characters `\`, `{` and `}`
pub fn escape_verbatim(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str(r"\PYZbs{}"),
            '{' => result.push_str(r"\PYZob{}"),
            '}' => result.push_str(r"\PYZcb{}"),
            _ => result.push(c),
        }
    }
    result
}
