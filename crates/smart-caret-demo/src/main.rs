//! Smart caret demo host
//!
//! Loads a file, places carets, runs one of the caret commands and prints the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p smart-caret-demo -- <file> <line:col>[,<line:col>...] <below|above> [count]
//! ```
//!
//! Lines and columns are zero-based. The command runs `count` times (default 1). Every line is
//! printed with its carets drawn as `|`, followed by the final caret list.
//!
//! # Options
//!
//! - `SMART_CARET_TAB_WIDTH`: tab width in cells
//! - `SMART_CARET_CONFIG`: path to a JSON options file, e.g. `{"tabWidth": 8}`
//!
//! The environment variable wins when both are set. Use `RUST_LOG=debug` to see why each caret
//! landed where it did.

use anyhow::{Context, Result, bail};
use log::info;
use smart_caret::{
    Command, CommandExecutor, CommandResult, Document, EditorOptions, LineSource, Position,
};
use std::{env, fs};

const USAGE: &str = "usage: smart-caret-demo <file> <line:col>[,<line:col>...] <below|above> [count]";

struct Args {
    path: String,
    carets: Vec<Position>,
    command: Command,
    count: usize,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let (Some(path), Some(carets), Some(direction)) = (args.next(), args.next(), args.next())
    else {
        bail!(USAGE);
    };

    let carets = carets
        .split(',')
        .map(parse_position)
        .collect::<Result<Vec<_>>>()?;

    let command = match direction.as_str() {
        "below" => Command::InsertCaretBelow,
        "above" => Command::InsertCaretAbove,
        // Registered ids work too.
        other => other.parse()?,
    };

    let count = match args.next() {
        Some(count) => count
            .parse()
            .with_context(|| format!("invalid count: {count}"))?,
        None => 1,
    };

    Ok(Args {
        path,
        carets,
        command,
        count,
    })
}

fn parse_position(arg: &str) -> Result<Position> {
    let (line, column) = arg
        .split_once(':')
        .with_context(|| format!("caret must be <line:col>, got {arg:?}"))?;
    let line = line
        .trim()
        .parse()
        .with_context(|| format!("invalid line in {arg:?}"))?;
    let column = column
        .trim()
        .parse()
        .with_context(|| format!("invalid column in {arg:?}"))?;
    Ok(Position::new(line, column))
}

fn load_options() -> Result<EditorOptions> {
    let mut options = match env::var("SMART_CARET_CONFIG") {
        Ok(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read options file {path}"))?;
            EditorOptions::from_json(&json)
                .with_context(|| format!("failed to load options from {path}"))?
        }
        Err(_) => EditorOptions::default(),
    };

    if let Ok(value) = env::var("SMART_CARET_TAB_WIDTH") {
        let tab_width = value
            .parse()
            .with_context(|| format!("invalid SMART_CARET_TAB_WIDTH: {value}"))?;
        options = EditorOptions::with_tab_width(tab_width)?;
    }

    Ok(options)
}

fn render(document: &Document) -> String {
    let carets = document.carets();
    let mut out = String::new();

    for line in 0..document.line_count() {
        let text = document.line_text(line).unwrap_or_default();
        let mut columns: Vec<usize> = carets
            .iter()
            .filter(|caret| caret.line == line)
            .map(|caret| caret.column)
            .collect();
        columns.sort_unstable();
        columns.dedup();

        let mut next = columns.iter().peekable();
        for (column, ch) in text.chars().enumerate() {
            while next.next_if(|&&caret| caret == column).is_some() {
                out.push('|');
            }
            out.push(ch);
        }
        if next.peek().is_some() {
            out.push('|');
        }
        out.push('\n');
    }

    out
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let options = load_options()?;
    let text =
        fs::read_to_string(&args.path).with_context(|| format!("failed to read {}", args.path))?;

    let mut document = Document::with_options(&text, options);
    document
        .set_carets(args.carets)
        .context("failed to place carets")?;
    info!(
        "loaded {} ({} lines, tab width {})",
        args.path,
        document.line_count(),
        options.tab_width
    );

    let mut executor = CommandExecutor::new(document);
    for _ in 0..args.count {
        match executor.execute(args.command)? {
            CommandResult::Inserted(position) => {
                info!("{}: caret at {}:{}", args.command, position.line, position.column)
            }
            CommandResult::Unchanged => {
                info!("{}: no line in that direction, stopping", args.command);
                break;
            }
        }
    }

    let document = executor.into_host();
    print!("{}", render(&document));

    let carets: Vec<String> = document
        .carets()
        .iter()
        .map(|caret| format!("{}:{}", caret.line, caret.column))
        .collect();
    println!("carets: {}", carets.join(","));

    Ok(())
}
