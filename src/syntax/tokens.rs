//! Token categories for styling
//!
//! A style table is keyed by these categories. Each category knows the
//! TextMate scope selector that picks out its tokens in the tokenizer's
//! output, which is how a category table turns into an engine theme.

/// Semantic token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments
    Comment,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Language keywords (if, def, return, etc.)
    Keyword,
    /// Builtin type keywords (int, char)
    KeywordType,
    /// Constant keywords (True, None, NULL)
    Constant,
    /// Symbolic operators
    Operator,
    /// Word operators (and, or, not, in)
    OperatorWord,
    /// Builtin functions and types
    Builtin,
    /// Function names at their definition
    Function,
    /// Class and type names at their definition
    Class,
    /// Module/namespace names
    Namespace,
    /// Decorators and annotations
    Decorator,
    /// Language variables (self, this)
    Variable,
    /// Markup tag names
    Tag,
    /// Markup attribute names
    Attribute,
    /// String literals
    String,
    /// Docstrings
    Doc,
    /// Escape sequences inside strings
    Escape,
    /// Regular expression literals
    Regex,
    /// Numeric literals
    Number,
    /// Section headings in markup
    Heading,
    /// Emphasized markup text
    Emph,
    /// Strong markup text
    Strong,
    /// Interpreter prompts (>>>, ...)
    Prompt,
    /// Interpreter output
    Output,
    /// Tracebacks in interpreter sessions
    Traceback,
    /// Text the tokenizer could not classify
    Error,
}

impl TokenType {
    /// Every category, in the order themes are generated
    pub const ALL: [TokenType; 27] = [
        TokenType::Comment,
        TokenType::Preprocessor,
        TokenType::Keyword,
        TokenType::KeywordType,
        TokenType::Constant,
        TokenType::Operator,
        TokenType::OperatorWord,
        TokenType::Builtin,
        TokenType::Function,
        TokenType::Class,
        TokenType::Namespace,
        TokenType::Decorator,
        TokenType::Variable,
        TokenType::Tag,
        TokenType::Attribute,
        TokenType::String,
        TokenType::Doc,
        TokenType::Escape,
        TokenType::Regex,
        TokenType::Number,
        TokenType::Heading,
        TokenType::Emph,
        TokenType::Strong,
        TokenType::Prompt,
        TokenType::Output,
        TokenType::Traceback,
        TokenType::Error,
    ];

    /// Scope selector matching this category's tokens
    pub fn scope_selector(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::Preprocessor => "meta.preprocessor, keyword.control.import.c",
            TokenType::Keyword => {
                "keyword, storage.type.function, storage.type.class, storage.modifier"
            }
            TokenType::KeywordType => "storage.type",
            TokenType::Constant => "constant.language",
            TokenType::Operator => "keyword.operator",
            TokenType::OperatorWord => "keyword.operator.logical, keyword.operator.word",
            TokenType::Builtin => "support.function, support.type",
            TokenType::Function => "entity.name.function",
            TokenType::Class => "entity.name.class, entity.name.type",
            TokenType::Namespace => "entity.name.namespace",
            TokenType::Decorator => "meta.annotation, entity.name.function.decorator",
            TokenType::Variable => "variable.language",
            TokenType::Tag => "entity.name.tag",
            TokenType::Attribute => "entity.other.attribute-name",
            TokenType::String => "string",
            TokenType::Doc => "comment.block.documentation, string.quoted.docstring",
            TokenType::Escape => "constant.character.escape",
            TokenType::Regex => "string.regexp",
            TokenType::Number => "constant.numeric",
            TokenType::Heading => "markup.heading",
            TokenType::Emph => "markup.italic",
            TokenType::Strong => "markup.bold",
            TokenType::Prompt => "generic.prompt",
            TokenType::Output => "generic.output",
            TokenType::Traceback => "generic.traceback",
            TokenType::Error => "invalid",
        }
    }

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "Comment",
            TokenType::Preprocessor => "Preprocessor",
            TokenType::Keyword => "Keyword",
            TokenType::KeywordType => "KeywordType",
            TokenType::Constant => "Constant",
            TokenType::Operator => "Operator",
            TokenType::OperatorWord => "OperatorWord",
            TokenType::Builtin => "Builtin",
            TokenType::Function => "Function",
            TokenType::Class => "Class",
            TokenType::Namespace => "Namespace",
            TokenType::Decorator => "Decorator",
            TokenType::Variable => "Variable",
            TokenType::Tag => "Tag",
            TokenType::Attribute => "Attribute",
            TokenType::String => "String",
            TokenType::Doc => "Doc",
            TokenType::Escape => "Escape",
            TokenType::Regex => "Regex",
            TokenType::Number => "Number",
            TokenType::Heading => "Heading",
            TokenType::Emph => "Emph",
            TokenType::Strong => "Strong",
            TokenType::Prompt => "Prompt",
            TokenType::Output => "Output",
            TokenType::Traceback => "Traceback",
            TokenType::Error => "Error",
        }
    }

    /// Parse a category from its name (for configuration overrides)
    pub fn from_name(name: &str) -> Option<Self> {
        TokenType::ALL.into_iter().find(|token| token.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("InvalidType"), None);
        assert_eq!(TokenType::from_name("comment"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_selectors_parse() {
        use syntect::highlighting::ScopeSelectors;
        use std::str::FromStr;

        for token_type in TokenType::ALL {
            assert!(
                ScopeSelectors::from_str(token_type.scope_selector()).is_ok(),
                "bad selector for {}",
                token_type.name()
            );
        }
    }
}
