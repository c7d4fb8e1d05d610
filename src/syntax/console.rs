//! Interactive interpreter sessions
//!
//! Prompted lines (`>>> ` and `... `) are tokenized with the Python syntax;
//! everything else is interpreter output or a traceback. The Python parse
//! state runs across `...` continuation lines and restarts at each `>>>`.

use syntect::parsing::{ParseState, Scope, ScopeStack, ScopeStackOp, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::stream::{with_trailing_newline, TokenLine, TokenStream, Uncertain};
use crate::error::{BridgeError, Result};

const TRACEBACK_HEADER: &str = "Traceback (most recent call last):";

/// Tokenizer for interpreter sessions, delegating code to Python
#[derive(Debug, Clone)]
pub struct ConsoleLexer {
    python: SyntaxReference,
    prompt: Scope,
    output: Scope,
    traceback: Scope,
}

/// Python code currently being continued
struct CodeBlock {
    state: ParseState,
    stack: ScopeStack,
}

impl ConsoleLexer {
    pub fn new(python: &SyntaxReference) -> Result<Self> {
        let scope = |name: &str| Scope::new(name).map_err(|e| BridgeError::Syntax(e.to_string()));
        Ok(Self {
            python: python.clone(),
            prompt: scope("generic.prompt.console")?,
            output: scope("generic.output.console")?,
            traceback: scope("generic.traceback.console")?,
        })
    }

    /// Name of the syntax code lines are delegated to
    pub fn code_syntax(&self) -> &str {
        &self.python.name
    }

    pub fn tokenize(
        &self,
        source: &str,
        syntaxes: &SyntaxSet,
    ) -> std::result::Result<TokenStream, Uncertain> {
        let text = with_trailing_newline(source);
        let mut stream = TokenStream::new();
        let mut block: Option<CodeBlock> = None;
        let mut in_traceback = false;

        for line in LinesWithEndings::from(&*text) {
            let mut ops = Vec::new();
            let prompt = split_prompt(line);

            // Anything but a continuation line ends the current code block
            if !matches!(prompt, Some((_, true))) {
                if let Some(done) = block.take() {
                    close_block(&mut ops, 0, &done);
                }
            }

            match prompt {
                Some((len, _)) => {
                    in_traceback = false;
                    ops.push((0, ScopeStackOp::Push(self.prompt)));
                    ops.push((len, ScopeStackOp::Pop(1)));

                    let code = block.get_or_insert_with(|| CodeBlock {
                        state: ParseState::new(&self.python),
                        stack: ScopeStack::new(),
                    });
                    let code_ops = code
                        .state
                        .parse_line(&line[len..], syntaxes)
                        .map_err(|e| Uncertain(e.to_string()))?;
                    for (offset, op) in code_ops {
                        code.stack.apply(&op).map_err(|e| Uncertain(e.to_string()))?;
                        ops.push((offset + len, op));
                    }
                }
                None => {
                    let scope = if line.starts_with(TRACEBACK_HEADER) {
                        in_traceback = true;
                        self.traceback
                    } else if in_traceback {
                        // The exception message is the first unindented line
                        if !line.starts_with(char::is_whitespace) {
                            in_traceback = false;
                        }
                        self.traceback
                    } else {
                        self.output
                    };
                    ops.push((0, ScopeStackOp::Push(scope)));
                    ops.push((line.len(), ScopeStackOp::Pop(1)));
                }
            }

            stream.push(TokenLine {
                text: line.to_string(),
                ops,
            });
        }

        if let (Some(done), Some(last)) = (block.take(), stream.last_mut()) {
            let end = last.text.len();
            close_block(&mut last.ops, end, &done);
        }

        Ok(stream)
    }
}

/// Pop whatever the finished block left open
fn close_block(ops: &mut Vec<(usize, ScopeStackOp)>, at: usize, block: &CodeBlock) {
    let open = block.stack.len();
    if open > 0 {
        ops.push((at, ScopeStackOp::Pop(open)));
    }
}

/// Prompt length and whether it is a continuation prompt
fn split_prompt(line: &str) -> Option<(usize, bool)> {
    for (marker, continuation) in [(">>>", false), ("...", true)] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.starts_with(' ') {
                return Some((marker.len() + 1, continuation));
            }
            if rest.trim().is_empty() {
                return Some((marker.len(), continuation));
            }
        }
    }
    None
}
