use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use recase::Case;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recase",
    version,
    about = "convert text to snake_case, kebab-case, camelCase or dot.case"
)]
struct Args {
    /// target case: snake, kebab, camel or dot
    #[arg(env("RECASE_CASE"))]
    case: Case,

    /// text to convert. reads stdin line by line when omitted
    text: Vec<String>,

    /// treat each input as a json value (`"text"`, `null`, `42`, ...).
    /// an empty line counts as a missing value
    #[arg(long)]
    json: bool,

    /// log inputs that fail to convert and carry on with the rest
    #[arg(long)]
    keep_going: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG env var sets logging level */))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    match args.text.is_empty() {
        true => run(&args, io::stdin().lock().lines(), &mut stdout),
        false => run(&args, args.text.iter().cloned().map(Ok), &mut stdout),
    }
}

fn run<I>(args: &Args, inputs: I, out: &mut dyn Write) -> anyhow::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    for (index, input) in inputs.into_iter().enumerate() {
        let input = input.context("failed to read input")?;
        match convert(args, &input) {
            Ok(converted) => {
                tracing::debug!(index, case = %args.case, %converted, "converted");
                writeln!(out, "{}", converted)?;
            }
            Err(err) if args.keep_going => {
                tracing::warn!(index, input = ?input, "skipped: {:#}", err);
            }
            Err(err) => return Err(err.context(format!("input #{} {:?}", index + 1, input))),
        }
    }
    out.flush()?;
    Ok(())
}

fn convert(args: &Args, input: &str) -> anyhow::Result<String> {
    if !args.json {
        return Ok(args.case.apply(input));
    }

    let value = match input.trim() {
        "" => None,
        raw => Some(serde_json::from_str::<Value>(raw).context("invalid json")?),
    };
    Ok(args.case.convert(value.as_ref())?)
}
