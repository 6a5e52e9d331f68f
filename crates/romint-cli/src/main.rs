//! Romint CLI
//!
//! Command-line interface for converting between Roman numerals and integers.

use clap::{Arg, ArgAction, Command};
use romint_formatter::format_str;
use romint_parser::parse;
use session::{Mode, Session};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

mod session;

fn cli() -> Command {
    Command::new("romint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Roman numerals and integers")
        .arg(
            Arg::new("roman")
                .short('r')
                .long("roman")
                .value_name("NUMERAL")
                .help("Convert a Roman numeral to an integer")
                .num_args(1)
                .conflicts_with("number"),
        )
        .arg(
            Arg::new("number")
                .short('n')
                .long("number")
                .value_name("INTEGER")
                .help("Convert an integer (1-3999) to a Roman numeral")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as a JSON object")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (RUST_LOG overrides)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let json = matches.get_flag("json");
    let result = if let Some(numeral) = matches.get_one::<String>("roman") {
        execute(Mode::RomanToInteger, numeral, json)
    } else if let Some(number) = matches.get_one::<String>("number") {
        execute(Mode::IntegerToRoman, number, json)
    } else {
        run_interactive().map(|()| None)
    };

    match result {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Convert a single value given on the command line
fn execute(mode: Mode, input: &str, json: bool) -> Result<Option<String>, anyhow::Error> {
    tracing::info!(?mode, input, "converting");
    if !json {
        return Ok(Some(mode.convert(input)?));
    }

    let output = match mode {
        Mode::RomanToInteger => serde_json::json!({
            "input": input,
            "output": parse(input)?,
        }),
        Mode::IntegerToRoman => serde_json::json!({
            "input": input,
            "output": format_str(input)?,
        }),
    };
    Ok(Some(serde_json::to_string(&output)?))
}

fn run_interactive() -> Result<(), anyhow::Error> {
    let stdin = io::stdin();
    Session::new(stdin.lock(), io::stdout()).run()?;
    Ok(())
}
