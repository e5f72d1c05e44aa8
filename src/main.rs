// Monkey: tokenizer, Pratt parser and canonical AST printer

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser as _;
use crossterm::tty::IsTty;

use monkey::parser::ParserOptions;
use monkey::repl::{self, ReplConfig};

#[derive(clap::Parser)]
#[command(name = "monkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse Monkey source and print its canonical form", long_about = None)]
struct Cli {
    /// Source file to parse once; starts an interactive shell when omitted
    file: Option<PathBuf>,

    /// Report end of input inside a block as an error
    #[arg(long)]
    strict_blocks: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the token stream instead of the parsed program
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ReplConfig {
        color: !cli.no_color && io::stdout().is_tty(),
        show_tokens: cli.tokens,
        show_locations: false,
        parser: ParserOptions {
            strict_blocks: cli.strict_blocks,
        },
    };

    let Some(path) = cli.file else {
        eprintln!("Monkey parser shell. Enter a line of code; Ctrl-D exits.");
        let stdin = io::stdin();
        repl::start(stdin.lock(), io::stdout().lock(), &config)?;
        return Ok(());
    };

    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        std::process::exit(1);
    }

    let source = fs::read_to_string(&path)?;
    config.show_locations = true;

    eprintln!("Parsing {}...", path.display());
    let rendered = repl::render(&source, &config);
    print!("{}", rendered.text);

    if rendered.had_errors {
        eprintln!("Parsing failed.");
        std::process::exit(1);
    }

    Ok(())
}
