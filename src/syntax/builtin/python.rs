//! Python lexers: source and interactive sessions

use log::debug;
use syntect::parsing::SyntaxSet;

use crate::error::Result;
use crate::syntax::lexer::Lexer;

/// Create the `python` and `pycon` lexers, if the syntax set has Python
pub fn python_lexers(syntaxes: &SyntaxSet) -> Result<Vec<Lexer>> {
    let Some(python) = syntaxes.find_syntax_by_token("python") else {
        debug!("no Python syntax loaded; python and pycon are not pre-registered");
        return Ok(Vec::new());
    };

    Ok(vec![Lexer::syntax("python", python), Lexer::console("pycon", python)?])
}
