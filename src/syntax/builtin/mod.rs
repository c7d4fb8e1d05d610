//! Built-in lexers and styles
//!
//! The registry starts out with a small fixed set of tags, and two category
//! styles ship with the crate.

mod friendly;
mod python;
mod sphinx;

use log::debug;
use syntect::parsing::SyntaxSet;

use super::lexer::Lexer;
use super::theme::StyleTable;
use crate::error::Result;

pub use friendly::friendly_style;
pub use sphinx::sphinx_style;

/// Names of the built-in category styles
pub const STYLE_NAMES: [&str; 2] = ["friendly", "sphinx"];

/// Tags resolved by syntax lookup, with the tokens tried for each
const SYNTAX_SEEDS: [(&str, &[&str]); 2] = [
    ("rest", &["rest", "rst", "restructuredtext"]),
    ("c", &["c"]),
];

/// Get all built-in lexers, each with the raise-on-error filter attached.
///
/// Seeds the syntax set cannot satisfy are left out.
pub fn all_lexers(syntaxes: &SyntaxSet) -> Result<Vec<Lexer>> {
    let mut lexers = vec![Lexer::syntax("none", syntaxes.find_syntax_plain_text())];
    lexers.extend(python::python_lexers(syntaxes)?);

    for (tag, tokens) in SYNTAX_SEEDS {
        match tokens.iter().find_map(|token| syntaxes.find_syntax_by_token(token)) {
            Some(syntax) => lexers.push(Lexer::syntax(tag, syntax)),
            None => debug!("no syntax for built-in language '{}'", tag),
        }
    }

    Ok(lexers.into_iter().map(Lexer::with_raise_on_error).collect())
}

/// Look up a built-in category style
pub fn style_by_name(name: &str) -> Option<StyleTable> {
    match name {
        "friendly" => Some(friendly_style()),
        "sphinx" => Some(sphinx_style()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lexers() {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let lexers = all_lexers(&syntaxes).unwrap();
        let tags: Vec<_> = lexers.iter().map(|l| l.tag()).collect();

        assert_eq!(&tags[..3], &["none", "python", "pycon"]);
        assert!(tags.contains(&"c"));
        assert!(lexers.iter().all(|l| l.raises_on_error()));
    }

    #[test]
    fn test_plain_text_only_set() {
        let mut builder = syntect::parsing::SyntaxSetBuilder::new();
        builder.add_plain_text_syntax();
        let syntaxes = builder.build();

        let lexers = all_lexers(&syntaxes).unwrap();
        assert_eq!(lexers.len(), 1);
        assert_eq!(lexers[0].tag(), "none");
    }

    #[test]
    fn test_style_by_name() {
        for name in STYLE_NAMES {
            assert_eq!(style_by_name(name).unwrap().name, name);
        }
        assert!(style_by_name("monokai").is_none());
    }
}
