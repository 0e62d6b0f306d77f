//! `basejson` command-line driver.
//!
//! Parses one JSON document and prints it back in compact form.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use basejson::{DEFAULT_MAX_NESTING_DEPTH, Parser, ParserOptions};
use clap::Parser as _;

const SAMPLE: &str = include_str!("../data/sample.json");

#[derive(clap::Parser)]
#[command(name = "basejson")]
#[command(about = "Parse a JSON document and print it in compact form", long_about = None)]
#[command(version)]
struct Cli {
    /// File to parse; `-` or nothing reads standard input
    #[arg(conflicts_with = "sample")]
    path: Option<PathBuf>,

    /// Parse the bundled sample document
    #[arg(long)]
    sample: bool,

    /// Require exactly one comma between members
    #[arg(long)]
    strict_commas: bool,

    /// Maximum number of nested objects and arrays
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Do not limit nesting
    #[arg(long, conflicts_with = "max_depth")]
    unlimited_depth: bool,
}

impl Cli {
    fn options(&self) -> ParserOptions {
        ParserOptions {
            strict_commas: self.strict_commas,
            max_nesting_depth: (!self.unlimited_depth).then_some(self.max_depth),
        }
    }

    fn read_input(&self) -> anyhow::Result<Vec<u8>> {
        if self.sample {
            return Ok(SAMPLE.as_bytes().to_vec());
        }
        match &self.path {
            Some(path) if path.as_os_str() != "-" => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut input = Vec::new();
                io::stdin()
                    .read_to_end(&mut input)
                    .context("failed to read standard input")?;
                Ok(input)
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let input = match cli.read_input() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(2);
        }
    };
    log::info!("read {} bytes", input.len());

    match Parser::from_bytes(&input, cli.options()).parse() {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
