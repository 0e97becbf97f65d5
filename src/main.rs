// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use string_formatter::config::{load_overrides, FormatOverrides};
use string_formatter::operations::OperationFactory;
use string_formatter::StringFormatter;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    defaults: Option<String>,
    options: Option<String>,
    json_input: bool,
    input: String,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--defaults <file>] [--options <file>] [--json] <input>", program);
    eprintln!("Example: {} --options rot13.yaml \"hello world\"", program);
    eprintln!("Example: {} --options ascii.toml --json 42", program);
    eprintln!("Options files may be YAML, TOML or JSON. Set RUST_LOG=debug to trace each step.");
    eprintln!("Operations run in this order: {}", OperationFactory::list_available_operations().join(" -> "));
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut defaults = None;
    let mut options = None;
    let mut json_input = false;
    let mut input = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--defaults" => defaults = Some(iter.next().context("--defaults needs a file path")?.clone()),
            "--options" => options = Some(iter.next().context("--options needs a file path")?.clone()),
            "--json" => json_input = true,
            other if input.is_none() => input = Some(other.to_string()),
            other => bail!("unexpected argument '{}'", other),
        }
    }

    Ok(CliArgs {
        defaults,
        options,
        json_input,
        input: input.context("missing input text")?,
    })
}

fn load(path: Option<&str>) -> Result<FormatOverrides> {
    match path {
        Some(path) => load_overrides(path).with_context(|| format!("loading options from {}", path)),
        None => Ok(FormatOverrides::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("string-formatter");
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    let formatter = StringFormatter::with_defaults(&load(cli.defaults.as_deref())?);
    let overrides = load(cli.options.as_deref())?;

    let input = if cli.json_input {
        serde_json::from_str(&cli.input).context("--json input is not valid JSON")?
    } else {
        Value::String(cli.input)
    };

    match formatter.format(&input, &overrides) {
        Value::String(text) => println!("{}", text),
        other => println!("{}", other),
    }

    Ok(())
}
