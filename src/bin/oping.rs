//! Command-line interface for oping
//! This binary parses oping files and prints them in different formats.
//!
//! Usage:
//!   oping inspect `<path>` [--format `<format>`]  - Parse the whole file and print the forest
//!   oping stream `<path>` [--format `<format>`]   - Print each top-level branch as it completes
//!   oping list-formats                          - List all available output formats
//!
//! Logging goes to stderr. Use `-v` (debug) or `-vv` (trace), or set `RUST_LOG`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use oping::oping::formats::{FormatError, FormatRegistry};
use oping::{parse_each_branch_file, parse_forest_file};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("oping")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting oping files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log parser events to stderr (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a whole file and print its forest")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("stream")
                .about("Parse a file in streaming mode, printing each top-level branch")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    setup_tracing(matches.get_count("verbose"));
    let registry = FormatRegistry::with_defaults();

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => {
            let (path, format) = path_and_format(inspect_matches, &registry);
            handle_inspect_command(path, format, &registry);
        }
        Some(("stream", stream_matches)) => {
            let (path, format) = path_and_format(stream_matches, &registry);
            handle_stream_command(path, format, &registry);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&registry);
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the oping file")
        .required(true)
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (e.g., 'treeviz', 'json', 'yaml')")
        .default_value("treeviz")
}

fn setup_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn path_and_format<'a>(matches: &'a ArgMatches, registry: &FormatRegistry) -> (&'a str, &'a str) {
    // Both arguments are required or defaulted by clap.
    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    if !registry.has(format) {
        fail(FormatError::FormatNotFound(format.clone()));
    }
    (path, format)
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: &str, registry: &FormatRegistry) {
    let forest = parse_forest_file(path).unwrap_or_else(|e| fail(e));
    let output = registry
        .serialize(&forest, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the stream command
fn handle_stream_command(path: &str, format: &str, registry: &FormatRegistry) {
    let mut format_error = None;
    let result = parse_each_branch_file(path, |branch| {
        if format_error.is_some() {
            return;
        }
        match registry.serialize(std::slice::from_ref(branch), format) {
            Ok(output) => print!("{}", output),
            Err(e) => format_error = Some(e),
        }
    });

    if let Some(e) = format_error {
        fail(e);
    }
    let stats = result.unwrap_or_else(|e| fail(e));
    tracing::info!(
        delivered = stats.delivered,
        allocated = stats.pool.allocated,
        reused = stats.pool.reused,
        "stream finished"
    );
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for (name, description) in registry.list() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
