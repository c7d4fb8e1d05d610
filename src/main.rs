//! cbhl - highlight a code block from the command line

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};

use codeblock_bridge::{BridgeConfig, HighlightBridge, RenderTarget, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to highlight; reads stdin when absent
    file: Option<PathBuf>,

    /// Language tag of the block
    #[arg(short, long, default_value = "python")]
    lang: String,

    /// Render LaTeX instead of HTML
    #[arg(long)]
    latex: bool,

    /// Number the lines
    #[arg(long)]
    linenos: bool,

    /// Style name
    #[arg(long)]
    style: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the stylesheet instead of highlighting
    #[arg(long)]
    stylesheet: bool,

    /// Render without the highlighting engine
    #[arg(long)]
    no_highlight: bool,

    /// List known language tags and syntax names
    #[arg(long)]
    list_languages: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => BridgeConfig::load_from(path)?,
        None => BridgeConfig::load()?,
    };
    if cli.latex {
        config.target = RenderTarget::Latex;
    }
    if let Some(style) = cli.style {
        config.style = style;
    }
    if cli.no_highlight {
        config.highlighting = false;
    }
    let line_numbers = cli.linenos || config.line_numbers;

    let bridge = HighlightBridge::new(&config)?;

    if cli.list_languages {
        print_languages(&bridge);
        return Ok(());
    }

    if cli.stylesheet {
        print!("{}", bridge.get_stylesheet());
        return Ok(());
    }

    let source = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    print!("{}", bridge.highlight_block(&source, &cli.lang, line_numbers)?);
    Ok(())
}

fn print_languages(bridge: &HighlightBridge) {
    if !bridge.is_available() {
        println!("Highlighting unavailable");
        return;
    }

    let (tags, syntaxes) = bridge.languages();
    println!("Registered tags:");
    for tag in tags {
        println!("  {}", tag);
    }
    println!();
    println!("Syntaxes:");
    for name in syntaxes {
        println!("  {}", name);
    }
}
