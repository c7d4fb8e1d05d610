//! codeblock-bridge - syntax highlighting for documentation code blocks
//!
//! Renders code blocks to HTML or LaTeX markup. A block the highlighter
//! cannot handle with confidence is shown unhighlighted instead of failing
//! the build.

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod format;
pub mod probe;
pub mod selector;
pub mod syntax;

pub use bridge::HighlightBridge;
pub use config::BridgeConfig;
pub use engine::HighlightOutcome;
pub use error::{BridgeError, Result};
pub use format::RenderTarget;
pub use probe::ParseOutcome;
pub use selector::Selection;
