//! Lexer registry
//!
//! Maps language tags to lexer handles. The registry starts with the
//! built-in tags and grows as new tags are first requested; it is never
//! pruned. A tag the engine cannot resolve is an error and is not cached.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::builtin;
use super::lexer::Lexer;
use crate::error::{BridgeError, Result};

/// Tag to lexer cache, safe to share between threads
#[derive(Debug, Default)]
pub struct LexerRegistry {
    lexers: RwLock<HashMap<String, Arc<Lexer>>>,
}

impl LexerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tags
    pub fn seeded(syntaxes: &SyntaxSet) -> Result<Self> {
        let registry = Self::new();
        for lexer in builtin::all_lexers(syntaxes)? {
            registry.insert(lexer);
        }
        Ok(registry)
    }

    /// Add a lexer under its own tag, replacing any previous entry
    pub fn insert(&self, lexer: Lexer) -> Arc<Lexer> {
        let lexer = Arc::new(lexer);
        self.lexers
            .write()
            .insert(lexer.tag().to_string(), Arc::clone(&lexer));
        lexer
    }

    pub fn get(&self, tag: &str) -> Option<Arc<Lexer>> {
        self.lexers.read().get(tag).cloned()
    }

    pub fn len(&self) -> usize {
        self.lexers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexers.read().is_empty()
    }

    /// Return the cached lexer for `tag`, resolving and caching it on first use.
    ///
    /// Resolution happens under the write lock, so two threads asking for the
    /// same unseen tag construct one lexer between them.
    pub fn resolve(&self, tag: &str, syntaxes: &SyntaxSet) -> Result<Arc<Lexer>> {
        if let Some(lexer) = self.get(tag) {
            return Ok(lexer);
        }

        let mut lexers = self.lexers.write();
        if let Some(lexer) = lexers.get(tag) {
            return Ok(Arc::clone(lexer));
        }

        let syntax = find_syntax(syntaxes, tag)
            .ok_or_else(|| BridgeError::UnknownLanguage(tag.to_string()))?;
        debug!("resolved language '{}' to syntax '{}'", tag, syntax.name);
        let lexer = Arc::new(Lexer::syntax(tag, syntax).with_raise_on_error());
        lexers.insert(tag.to_string(), Arc::clone(&lexer));
        Ok(lexer)
    }

    /// List registered tags
    pub fn list_languages(&self) -> Vec<String> {
        let mut tags: Vec<_> = self.lexers.read().keys().cloned().collect();
        tags.sort();
        tags
    }
}

/// Look up a syntax by file extension or case-insensitive name
pub fn find_syntax<'a>(syntaxes: &'a SyntaxSet, tag: &str) -> Option<&'a SyntaxReference> {
    if tag.trim().is_empty() {
        return None;
    }
    syntaxes.find_syntax_by_token(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_seeded_tags() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let registry = LexerRegistry::seeded(&syntaxes).unwrap();

        for tag in ["none", "python", "pycon", "c"] {
            let lexer = registry.get(tag).unwrap_or_else(|| panic!("missing seed {}", tag));
            assert!(lexer.raises_on_error());
        }
        assert!(registry.get("pycon").unwrap().is_console());
        assert_eq!(registry.get("none").unwrap().syntax_name(), "Plain Text");
    }

    #[test]
    fn test_resolve_caches_same_instance() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let registry = LexerRegistry::seeded(&syntaxes).unwrap();
        let before = registry.len();

        assert!(registry.get("rs").is_none());
        let first = registry.resolve("rs", &syntaxes).unwrap();
        let second = registry.resolve("rs", &syntaxes).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.raises_on_error());
        assert_eq!(first.syntax_name(), "Rust");
        assert_eq!(registry.len(), before + 1);
    }

    #[test]
    fn test_find_syntax_by_extension_or_name() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let name = |tag: &str| find_syntax(&syntaxes, tag).map(|s| s.name.as_str());

        assert_eq!(name("rs"), Some("Rust"));
        assert_eq!(name("Rust"), Some("Rust"));
        assert_eq!(name("restructuredtext"), Some("reStructuredText"));
        assert_eq!(name("  "), None);
    }

    #[test]
    fn test_unknown_tag_not_cached() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let registry = LexerRegistry::seeded(&syntaxes).unwrap();
        let before = registry.len();

        let err = registry.resolve("no-such-language-xyz", &syntaxes).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownLanguage(tag) if tag == "no-such-language-xyz"));
        assert!(matches!(
            registry.resolve("", &syntaxes),
            Err(BridgeError::UnknownLanguage(_))
        ));
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_concurrent_first_use() {
        let syntaxes = Arc::new(SyntaxSet::load_defaults_newlines());
        let registry = Arc::new(LexerRegistry::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let syntaxes = Arc::clone(&syntaxes);
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.resolve("js", &syntaxes).unwrap())
            })
            .collect();
        let lexers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), 1);
        assert!(lexers.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }

    #[test]
    fn test_list_languages_sorted() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let registry = LexerRegistry::seeded(&syntaxes).unwrap();
        let tags = registry.list_languages();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
        assert!(tags.contains(&"python".to_string()));
    }
}
