//! Category style tables and theme resolution
//!
//! Built-in styles are tables from token category to attributes. They are
//! converted into engine themes once, when a bridge is constructed.

use std::collections::BTreeMap;
use std::str::FromStr;

use log::{debug, warn};
use syntect::highlighting::{ScopeSelectors, Theme, ThemeItem, ThemeSet};

use super::builtin;
use super::style::{Color, Style};
use super::tokens::TokenType;
use crate::error::{BridgeError, Result};

/// A named table of category styles
#[derive(Debug, Clone)]
pub struct StyleTable {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    entries: Vec<(TokenType, Style)>,
}

impl StyleTable {
    /// Create an empty table with black text on `background`
    pub fn new(name: &str, background: Color) -> Self {
        Self {
            name: name.to_string(),
            background,
            foreground: Color::rgb(0, 0, 0),
            entries: Vec::new(),
        }
    }

    /// Set the style for a category, replacing any previous entry
    pub fn set(&mut self, token: TokenType, style: Style) {
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = style,
            None => self.entries.push((token, style)),
        }
    }

    pub fn get(&self, token: TokenType) -> Option<&Style> {
        self.entries.iter().find(|(t, _)| *t == token).map(|(_, s)| s)
    }

    /// Apply `Category = "attributes"` overrides
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) -> Result<()> {
        for (name, spec) in overrides {
            let token =
                TokenType::from_name(name).ok_or_else(|| BridgeError::UnknownToken(name.clone()))?;
            self.set(token, Style::parse(spec)?);
        }
        Ok(())
    }

    /// Build an engine theme from this table
    pub fn to_theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        theme.name = Some(self.name.clone());
        theme.settings.foreground = Some(self.foreground.to_engine());
        theme.settings.background = Some(self.background.to_engine());

        // Generated in category order so output is stable between runs
        for token in TokenType::ALL {
            let Some(style) = self.get(token) else {
                continue;
            };
            let scope = ScopeSelectors::from_str(token.scope_selector())
                .map_err(|e| BridgeError::Syntax(e.to_string()))?;
            theme.scopes.push(ThemeItem {
                scope,
                style: style.to_modifier(),
            });
        }
        Ok(theme)
    }
}

/// Resolve a style name into an engine theme.
///
/// Built-in category styles come first; any other name is looked up in the
/// engine's bundled theme set.
pub fn resolve_theme(name: &str, overrides: &BTreeMap<String, String>) -> Result<Theme> {
    if let Some(mut table) = builtin::style_by_name(name) {
        table.apply_overrides(overrides)?;
        debug!("using built-in style '{}' ({} overrides)", name, overrides.len());
        return table.to_theme();
    }

    let mut bundled = ThemeSet::load_defaults();
    let theme = bundled
        .themes
        .remove(name)
        .ok_or_else(|| BridgeError::UnknownStyle(name.to_string()))?;
    if !overrides.is_empty() {
        warn!("style overrides only apply to built-in styles; ignoring them for '{}'", name);
    }
    Ok(theme)
}
