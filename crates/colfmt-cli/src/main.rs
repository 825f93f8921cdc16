//! Command-line front end for the `colfmt` formatting library.
//!
//! Reads delimited text from stdin (or from file arguments), builds a
//! [`Model`], and writes the aligned block to stdout. All input is consumed
//! before any formatting happens; malformed input exits non-zero with a
//! message on stderr.

mod demo;

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colfmt::{AlignSpec, Model, Screen, Table, DEFAULT_SPACER};

/// Format 2D data into aligned columns (reads CSV or plain text).
#[derive(Debug, Parser)]
#[command(name = "colfmt", version, about)]
struct Cli {
    /// Input file(s). If omitted, read from standard input.
    files: Vec<PathBuf>,

    /// Delimiter for CSV/plain-text input.
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// String placed between columns.
    #[arg(short, long, default_value = DEFAULT_SPACER)]
    spacer: String,

    /// Treat each input line as a column (default: each line is a row).
    #[arg(long)]
    columns: bool,

    /// Treat the first row (or the first field of each line with
    /// --columns) as headings.
    #[arg(long)]
    header: bool,

    /// Suppress the dash separator line under the headings.
    #[arg(long = "no-sep")]
    no_sep: bool,

    /// Alignment for columns: left, right, center or auto. A single value
    /// applies to all columns; a comma-separated list pins each column.
    #[arg(long)]
    align: Option<String>,

    /// Run the built-in demo instead of reading stdin/files.
    #[arg(long)]
    demo: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("colfmt: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.demo {
        print!("{}", demo::render()?);
        return Ok(());
    }

    let delimiter = parse_delimiter(&cli.delimiter)?;
    let align = match &cli.align {
        Some(spec) => spec.parse::<AlignSpec>()?,
        None => AlignSpec::default(),
    };

    let input = read_input(&cli.files)?;
    let model = if cli.columns {
        Model::from_column_lines(input.as_bytes(), delimiter, cli.header, align)?
    } else {
        Model::from_csv(input.as_bytes(), delimiter, cli.header, align)?
    };

    let rendered = if cli.header {
        Table::new(&model)
            .spacer(cli.spacer.as_str())
            .show_separator(!cli.no_sep)
            .to_string()
    } else {
        Screen::new(&model).spacer(cli.spacer.as_str()).to_string()
    };
    println!("{rendered}");
    Ok(())
}

fn parse_delimiter(arg: &str) -> anyhow::Result<u8> {
    match arg.as_bytes() {
        [byte] => Ok(*byte),
        _ => anyhow::bail!("delimiter must be a single character, got '{arg}'"),
    }
}

fn read_input(files: &[PathBuf]) -> anyhow::Result<String> {
    let mut input = String::new();
    if files.is_empty() {
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    for path in files {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut input))
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(input)
}
