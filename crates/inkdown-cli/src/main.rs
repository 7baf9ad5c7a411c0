//! Inkdown CLI - convert Inkdown documents to HTML and inspect them
//!
//! Usage:
//!   inkdown [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   render    Convert the document to HTML
//!   stats     Show document statistics
//!   lines     Show how each line is classified
//!
//! FILE defaults to stdin. `-v` may be repeated to raise the log level;
//! `RUST_LOG` overrides it.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inkdown_core::lexer::Lexer;
use inkdown_core::{classify, to_html, LineKind};
use log::{debug, info, LevelFilter};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "inkdown", version, about = "Convert Inkdown documents to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a document to HTML
    Render {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show document statistics
    Stats {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
    /// Show the classification of every line
    Lines {
        /// Input file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Render { file, output } => {
            let input = read_input(file.as_deref())?;
            cmd_render(&input, output.as_deref(), cli.json)
        }
        Command::Stats { file } => {
            let input = read_input(file.as_deref())?;
            cmd_stats(&input, cli.json)
        }
        Command::Lines { file } => {
            let input = read_input(file.as_deref())?;
            cmd_lines(&input, cli.json)
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    read_input_from(file, io::stdin())
}

fn read_input_from<R: Read>(file: Option<&Path>, mut stdin: R) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let input = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            info!("read {} bytes from {}", input.len(), path.display());
            Ok(input)
        }
        _ => {
            let mut input = String::new();
            stdin
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            info!("read {} bytes from stdin", input.len());
            Ok(input)
        }
    }
}

// =============================================================================
// Render Command
// =============================================================================

#[derive(Serialize)]
struct JsonRender<'a> {
    html: &'a str,
}

fn cmd_render(input: &str, output: Option<&Path>, json: bool) -> Result<()> {
    let html = to_html(input);

    let rendered = if json {
        serde_json::to_string_pretty(&JsonRender { html: &html })?
    } else {
        html
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!("wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct DocumentStats {
    lines: usize,
    headers: usize,
    lists: usize,
    list_items: usize,
    paragraphs: usize,
    empty_paragraphs: usize,
    chars: usize,
    words: usize,
}

impl DocumentStats {
    fn from_input(input: &str) -> Self {
        let mut stats = Self {
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            ..Self::default()
        };

        let mut in_list = false;
        for line in Lexer::new(input) {
            stats.lines += 1;
            let kind = classify(line.text);
            match kind {
                LineKind::Header { .. } => stats.headers += 1,
                LineKind::ListItem { .. } => {
                    if !in_list {
                        stats.lists += 1;
                    }
                    stats.list_items += 1;
                }
                LineKind::Paragraph { content } => {
                    stats.paragraphs += 1;
                    if content.is_empty() {
                        stats.empty_paragraphs += 1;
                    }
                }
            }
            in_list = kind.is_list_item();
        }

        debug!("computed stats: {:?}", stats);
        stats
    }
}

fn cmd_stats(input: &str, json: bool) -> Result<()> {
    let stats = DocumentStats::from_input(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Document Statistics");
    println!("-------------------");
    println!("Blocks:");
    println!("  Headers:          {}", stats.headers);
    println!("  Lists:            {}", stats.lists);
    println!("  List items:       {}", stats.list_items);
    println!("  Paragraphs:       {}", stats.paragraphs);
    println!("  Empty paragraphs: {}", stats.empty_paragraphs);
    println!();
    println!("Size:");
    println!("  Characters:       {}", stats.chars);
    println!("  Words (est.):     {}", stats.words);
    println!("  Lines:            {}", stats.lines);

    Ok(())
}

// =============================================================================
// Lines Command
// =============================================================================

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    line: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<usize>,
    content: &'a str,
    start: u32,
    end: u32,
}

fn collect_lines(input: &str) -> Vec<JsonLine<'_>> {
    Lexer::new(input)
        .enumerate()
        .map(|(i, line)| {
            let kind = classify(line.text);
            JsonLine {
                line: i + 1,
                kind: kind.name(),
                level: match kind {
                    LineKind::Header { level, .. } => Some(level),
                    _ => None,
                },
                content: kind.content(),
                start: line.span.start,
                end: line.span.end,
            }
        })
        .collect()
}

fn cmd_lines(input: &str, json: bool) -> Result<()> {
    let lines = collect_lines(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for line in &lines {
        let kind = match line.level {
            Some(level) => format!("{} (level {})", line.kind, level),
            None => line.kind.to_string(),
        };
        println!(
            "[{}] {} at bytes {}..{}: {:?}",
            line.line, kind, line.start, line.end, line.content
        );
    }

    Ok(())
}
