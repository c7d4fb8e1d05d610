//! The highlighting bridge
//!
//! `HighlightBridge` is what documentation builders talk to: it picks a
//! lexer for a code block, renders it, and falls back to escaped plain
//! markup whenever the highlighter can't be trusted with the block. Only an
//! unknown language tag is reported as an error.

use log::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::engine::{Engine, HighlightOutcome};
use crate::error::Result;
use crate::fallback;
use crate::format::RenderTarget;
use crate::selector::{self, Selection};
use crate::syntax::{load_syntaxes, resolve_theme};

pub struct HighlightBridge {
    target: RenderTarget,
    engine: Option<Engine>,
}

impl HighlightBridge {
    /// Build a bridge from configuration.
    ///
    /// If the engine's syntax definitions cannot be loaded, the bridge runs
    /// degraded: every block renders unhighlighted. An unknown style name or
    /// a bad override is an error.
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        if !config.highlighting {
            info!("highlighting disabled; code blocks render unhighlighted");
            return Ok(Self::unhighlighted(config.target));
        }

        let syntaxes = match load_syntaxes(config.syntax_dir.as_deref()) {
            Ok(syntaxes) => syntaxes,
            Err(err) => {
                warn!("highlighting unavailable, rendering unhighlighted: {}", err);
                return Ok(Self::unhighlighted(config.target));
            }
        };

        let theme = resolve_theme(&config.style, &config.style_overrides)?;
        Ok(Self {
            target: config.target,
            engine: Some(Engine::new(syntaxes, &theme)?),
        })
    }

    /// A bridge with no highlighting engine
    pub fn unhighlighted(target: RenderTarget) -> Self {
        Self { target, engine: None }
    }

    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Whether blocks can be highlighted at all
    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Choose how `source` tagged `lang` would be rendered
    pub fn select_lexer(&self, lang: &str, source: &str) -> Result<Selection> {
        match &self.engine {
            Some(engine) => {
                selector::select_lexer(engine.registry(), engine.syntaxes(), lang, source)
            }
            None => Ok(Selection::Unhighlighted("highlighting unavailable".to_string())),
        }
    }

    /// Render a code block.
    ///
    /// Returns markup for every block except one tagged with a language the
    /// engine doesn't know.
    pub fn highlight_block(&self, source: &str, lang: &str, line_numbers: bool) -> Result<String> {
        let Some(engine) = &self.engine else {
            return Ok(self.unhighlighted_block(source));
        };

        let selection =
            selector::select_lexer(engine.registry(), engine.syntaxes(), lang, source)?;
        let lexer = match selection {
            Selection::Lexer(lexer) => lexer,
            Selection::Unhighlighted(_) => return Ok(self.unhighlighted_block(source)),
        };

        let formatter = engine.formatter(self.target, line_numbers);
        match engine.highlight(source, &lexer, formatter) {
            HighlightOutcome::Success(markup) => Ok(markup),
            HighlightOutcome::Uncertain(reason) => {
                // most probably not the selected language
                debug!("'{}' lexer unsure ({}); rendering unhighlighted", lexer.tag(), reason);
                Ok(self.unhighlighted_block(source))
            }
        }
    }

    /// Style definitions for this bridge's markup; empty without an engine
    pub fn get_stylesheet(&self) -> String {
        match &self.engine {
            Some(engine) => engine.formatter(self.target, false).style_defs().to_string(),
            None => String::new(),
        }
    }

    /// Tags the registry knows so far, plus every syntax name the engine has
    pub fn languages(&self) -> (Vec<String>, Vec<String>) {
        match &self.engine {
            Some(engine) => {
                let syntaxes = engine
                    .syntaxes()
                    .syntaxes()
                    .iter()
                    .map(|s| s.name.clone())
                    .collect();
                (engine.registry().list_languages(), syntaxes)
            }
            None => (Vec::new(), Vec::new()),
        }
    }

    fn unhighlighted_block(&self, source: &str) -> String {
        fallback::unhighlighted(self.target, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    fn bridge(target: RenderTarget) -> HighlightBridge {
        let config = BridgeConfig {
            target,
            ..BridgeConfig::default()
        };
        HighlightBridge::new(&config).unwrap()
    }

    const BANGS: &str = r#"%YAML 1.2
---
name: Bangs
file_extensions: [bangs]
scope: source.bangs
contexts:
  main:
    - match: '!!'
      scope: invalid.illegal.bangs
    - match: '\b\d+\b'
      scope: constant.numeric.bangs
"#;

    #[test]
    fn test_session_uses_console_lexer() {
        let bridge = bridge(RenderTarget::Html);
        for source in [">>> 1 + 1\n2\n", ">>> def f(:\n", ">>>"] {
            let selection = bridge.select_lexer("python", source).unwrap();
            assert!(selection.lexer().unwrap().is_console(), "for {:?}", source);
        }

        let html = bridge.highlight_block(">>> 1 + 1\n2\n", "python", false).unwrap();
        assert!(html.contains("generic prompt console"));
        assert!(html.contains("generic output console"));
    }

    #[test]
    fn test_valid_python_is_highlighted() {
        let bridge = bridge(RenderTarget::Html);
        let source = "import os\n\ndef main():\n    return os.getcwd()\n";

        let selection = bridge.select_lexer("python", source).unwrap();
        assert_eq!(selection.lexer().unwrap().tag(), "python");

        let html = bridge.highlight_block(source, "python", false).unwrap();
        assert_ne!(html, fallback::unhighlighted(RenderTarget::Html, source));
        assert!(html.starts_with("<div class=\"highlight code\"><pre>"));
    }

    #[test]
    fn test_unknown_string_escapes_are_highlighted() {
        let bridge = bridge(RenderTarget::Html);
        for source in [
            "import re\nre.compile(\"\\d+\")\n",
            "print(\"a\\qb\")\n",
            "x = '\\.'\n",
        ] {
            let selection = bridge.select_lexer("python", source).unwrap();
            assert_eq!(selection.lexer().unwrap().tag(), "python");
            assert_ne!(
                bridge.highlight_block(source, "python", false).unwrap(),
                fallback::unhighlighted(RenderTarget::Html, source),
                "for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_documentation_snippets_are_highlighted() {
        let snippets = [
            "import re\n\nPATTERN = re.compile(r\"(\\w+)\\s*=\\s*(.*)\")\n",
            "path = \"C:\\\\Users\\\\docs\\n\"\nprint(path.split(\"\\\\\"))\n",
            "@property\ndef name(self):\n    return self._name\n",
            "@app.route(\"/\", methods=[\"GET\"])\ndef index():\n    return \"ok\"\n",
            "squares = [x * x for x in range(10) if x % 2]\nlookup = {k: v for k, v in pairs}\n",
            "class Config(dict):\n    \"\"\"Settings.\"\"\"\n\n    def get(self):\n        ...\n",
            "name = \"world\"\nprint(f\"hello {name}\")\n",
            "try:\n    value = int(text)\nexcept ValueError as exc:\n    raise SystemExit(exc)\n",
            "with open(\"data.txt\") as fh:\n    print(fh.read().rstrip(\"\\r\\n\"))\n",
        ];

        let bridge = bridge(RenderTarget::Html);
        for source in snippets {
            assert_ne!(
                bridge.highlight_block(source, "python", false).unwrap(),
                fallback::unhighlighted(RenderTarget::Html, source),
                "for {:?}",
                source
            );
        }

        let sessions = [
            ">>> import re\n>>> re.match(\"\\d+\", \"42\").group()\n'42'\n",
            ">>> for i in range(2):\n...     print(\"a\\tb\", i)\n...\na\tb 0\na\tb 1\n",
            ">>> [c for c in \"a\\qb\"]\n['a', '\\\\', 'q', 'b']\n",
        ];
        for source in sessions {
            let selection = bridge.select_lexer("python", source).unwrap();
            assert!(selection.lexer().unwrap().is_console());
            assert_ne!(
                bridge.highlight_block(source, "python", false).unwrap(),
                fallback::unhighlighted(RenderTarget::Html, source),
                "for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_invalid_python_falls_back() {
        for target in [RenderTarget::Html, RenderTarget::Latex] {
            let bridge = bridge(target);
            let source = "def f(:\n  pass";
            assert_eq!(
                bridge.highlight_block(source, "python", false).unwrap(),
                fallback::unhighlighted(target, source)
            );
        }
    }

    #[test]
    fn test_elided_python_is_highlighted() {
        let bridge = bridge(RenderTarget::Html);
        let source = "def f():\n    ...\n";
        let html = bridge.highlight_block(source, "python", false).unwrap();
        assert_ne!(html, fallback::unhighlighted(RenderTarget::Html, source));
    }

    #[test]
    fn test_render_is_repeatable() {
        let bridge = bridge(RenderTarget::Latex);
        let source = "x = {'a': [1, 2]}  # @ sign\n";
        for line_numbers in [false, true] {
            let first = bridge.highlight_block(source, "python", line_numbers).unwrap();
            let second = bridge.highlight_block(source, "python", line_numbers).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_latex_fallback_escapes() {
        let bridge = bridge(RenderTarget::Latex);
        let source = "@decorator[x] oops(";
        let latex = bridge.highlight_block(source, "python", false).unwrap();

        assert_eq!(
            latex,
            concat!(
                "\\begin{Verbatim}[commandchars=@\\[\\]]\n",
                "@at[]decorator@lb[]x@rb[] oops(\\end{Verbatim}\n"
            )
        );
        assert!(!latex.contains(['\u{E000}', '\u{E001}', '\u{E002}']));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let bridge = bridge(RenderTarget::Html);
        let err = bridge.highlight_block("x", "no-such-language-xyz", false).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownLanguage(tag) if tag == "no-such-language-xyz"));
    }

    #[test]
    fn test_unavailable_engine_degrades() {
        let bridge = HighlightBridge::unhighlighted(RenderTarget::Html);
        assert!(!bridge.is_available());
        assert_eq!(bridge.get_stylesheet(), "");
        assert_eq!(
            bridge.highlight_block("a < b", "python", true).unwrap(),
            "<pre>a &lt; b</pre>\n"
        );
        assert_eq!(
            bridge.highlight_block("x", "no-such-language-xyz", false).unwrap(),
            "<pre>x</pre>\n"
        );
    }

    #[test]
    fn test_disabled_by_config() {
        let config = BridgeConfig {
            target: RenderTarget::Latex,
            highlighting: false,
            ..BridgeConfig::default()
        };
        let bridge = HighlightBridge::new(&config).unwrap();
        assert!(!bridge.is_available());
        assert_eq!(
            bridge.highlight_block("[1]", "c", false).unwrap(),
            "\\begin{Verbatim}[commandchars=@\\[\\]]\n@lb[]1@rb[]\\end{Verbatim}\n"
        );
    }

    #[test]
    fn test_unloadable_syntaxes_degrade() {
        let dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig {
            syntax_dir: Some(dir.path().join("missing")),
            ..BridgeConfig::default()
        };
        let bridge = HighlightBridge::new(&config).unwrap();
        assert!(!bridge.is_available());
        assert_eq!(bridge.get_stylesheet(), "");
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        let config = BridgeConfig {
            style: "no-such-style".to_string(),
            ..BridgeConfig::default()
        };
        assert!(matches!(
            HighlightBridge::new(&config),
            Err(BridgeError::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_stylesheet_per_target() {
        let html = bridge(RenderTarget::Html).get_stylesheet();
        assert!(html.contains("#eeffcc"));

        let latex = bridge(RenderTarget::Latex).get_stylesheet();
        assert!(latex.contains(r"\def\PYZbs"));
    }

    #[test]
    fn test_tokenizer_errors_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Bangs.sublime-syntax"), BANGS).unwrap();
        let config = BridgeConfig {
            syntax_dir: Some(dir.path().to_path_buf()),
            ..BridgeConfig::default()
        };
        let bridge = HighlightBridge::new(&config).unwrap();

        let clean = bridge.highlight_block("1 2 3", "bangs", false).unwrap();
        assert!(clean.contains("constant numeric bangs"));

        let source = "1 !! 2";
        assert_eq!(
            bridge.highlight_block(source, "bangs", false).unwrap(),
            fallback::unhighlighted(RenderTarget::Html, source)
        );
    }

    #[test]
    fn test_shared_between_threads() {
        let bridge = Arc::new(bridge(RenderTarget::Html));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let bridge = Arc::clone(&bridge);
                thread::spawn(move || {
                    bridge
                        .highlight_block("fn main() {}\n", "rust", false)
                        .unwrap()
                })
            })
            .collect();
        let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(bridge.languages().0.contains(&"rust".to_string()));
    }
}
