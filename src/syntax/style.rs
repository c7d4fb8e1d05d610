//! Style attributes for token categories
//!
//! Attributes can be written in a compact form, `"bold italic #408090"`,
//! which is how configuration overrides are spelled.

use syntect::highlighting::{Color as EngineColor, FontStyle, StyleModifier};

use crate::error::{BridgeError, Result};

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #333 is shorthand for #333333
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }

    pub fn to_engine(self) -> EngineColor {
        EngineColor {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 0xFF,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Parse the compact attribute form.
    ///
    /// Words are `bold`, `italic`, `underline`, `#hex` (foreground) and
    /// `bg:#hex`, separated by whitespace. An empty string is a plain style.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut style = Style::default();
        for word in spec.split_whitespace() {
            match word {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                _ => {
                    let (slot, hex) = match word.strip_prefix("bg:") {
                        Some(hex) => (&mut style.bg, hex),
                        None => (&mut style.fg, word),
                    };
                    *slot = Some(
                        Color::parse_hex(hex)
                            .ok_or_else(|| BridgeError::InvalidStyle(spec.to_string()))?,
                    );
                }
            }
        }
        Ok(style)
    }

    /// Convert into the engine's theme modifier
    pub fn to_modifier(&self) -> StyleModifier {
        let mut font_style = FontStyle::empty();
        if self.bold {
            font_style |= FontStyle::BOLD;
        }
        if self.italic {
            font_style |= FontStyle::ITALIC;
        }
        if self.underline {
            font_style |= FontStyle::UNDERLINE;
        }
        StyleModifier {
            foreground: self.fg.map(Color::to_engine),
            background: self.bg.map(Color::to_engine),
            font_style: Some(font_style),
        }
    }
}
