//! HTML formatter: classed spans plus a generated stylesheet

use syntect::highlighting::Theme;
use syntect::html::{css_for_theme_with_class_style, line_tokens_to_classed_spans, ClassStyle};
use syntect::parsing::ScopeStack;

use crate::error::{BridgeError, Result};
use crate::syntax::{TokenStream, Uncertain};

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    line_numbers: bool,
    css: String,
}

impl HtmlFormatter {
    pub fn new(theme: &Theme, line_numbers: bool) -> Result<Self> {
        let css = css_for_theme_with_class_style(theme, CLASS_STYLE)
            .map_err(|e| BridgeError::Syntax(e.to_string()))?;
        Ok(Self { line_numbers, css })
    }

    pub fn style_defs(&self) -> &str {
        &self.css
    }

    pub fn format(&self, stream: &TokenStream) -> std::result::Result<String, Uncertain> {
        let mut code = String::new();
        let mut stack = ScopeStack::new();
        let mut open: isize = 0;

        for line in stream.lines() {
            let (html, delta) =
                line_tokens_to_classed_spans(&line.text, &line.ops, CLASS_STYLE, &mut stack)
                    .map_err(|e| Uncertain(e.to_string()))?;
            code.push_str(&html);
            open += delta;
        }
        for _ in 0..open.max(0) {
            code.push_str("</span>");
        }

        let block = format!("<div class=\"highlight code\"><pre>{}</pre></div>", code);
        if !self.line_numbers {
            return Ok(block + "\n");
        }

        let numbers: Vec<String> = (1..=stream.line_count()).map(|n| n.to_string()).collect();
        Ok(format!(
            concat!(
                "<table class=\"highlighttable\"><tr>",
                "<td class=\"linenos\"><div class=\"linenodiv\"><pre>{}</pre></div></td>",
                "<td class=\"code\">{}</td>",
                "</tr></table>\n",
            ),
            numbers.join("\n"),
            block
        ))
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
