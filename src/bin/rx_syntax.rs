//! Command-line interface for rx-syntax
//! This binary is used to inspect dialect capability matrices and to check
//! individual constructs against a dialect, the same sequence a parser runs.
//!
//! Usage:
//!   rx-syntax list                                   - List built-in dialects
//!   rx-syntax matrix `<dialect>` [--format `<format>`]   - Print a dialect's capability matrix
//!   rx-syntax check `<dialect>` `<category>` `<token>`       - Validate and normalize one construct

use clap::{Arg, Command};
use rx_syntax::syntax::dialects;
use rx_syntax::{normalize, Category, Token};

fn main() {
    let matches = Command::new("rx-syntax")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting regex dialect feature matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List built-in dialects"))
        .subcommand(
            Command::new("matrix")
                .about("Print a dialect's capability matrix")
                .arg(
                    Arg::new("dialect")
                        .help("Dialect name, e.g. 'ruby/1.9'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a construct against a dialect and print its canonical form")
                .arg(
                    Arg::new("dialect")
                        .help("Dialect name, e.g. 'ruby/1.9'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("category")
                        .help("Construct category, e.g. 'group'")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("token")
                        .help("Construct token as scanned, e.g. 'named_ab'")
                        .required(true)
                        .index(3),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("list", _)) => {
            handle_list_command();
        }
        Some(("matrix", matrix_matches)) => {
            let dialect = matrix_matches.get_one::<String>("dialect").unwrap();
            let format = matrix_matches.get_one::<String>("format").unwrap();
            handle_matrix_command(dialect, format);
        }
        Some(("check", check_matches)) => {
            let dialect = check_matches.get_one::<String>("dialect").unwrap();
            let category = check_matches.get_one::<String>("category").unwrap();
            let token = check_matches.get_one::<String>("token").unwrap();
            handle_check_command(dialect, category, token);
        }
        _ => unreachable!(),
    }
}

fn lookup_dialect(name: &str) -> &'static rx_syntax::Features {
    dialects::for_name(name).unwrap_or_else(|| {
        eprintln!("Unknown dialect: {name} (try 'rx-syntax list')");
        std::process::exit(1);
    })
}

/// Handle the list command
fn handle_list_command() {
    for name in dialects::names() {
        println!("{name}");
    }
}

/// Handle the matrix command
fn handle_matrix_command(dialect: &str, format: &str) {
    let matrix = lookup_dialect(dialect).matrix();
    let output = match format {
        "json" => serde_json::to_string_pretty(&matrix).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }),
        "yaml" => serde_yaml::to_string(&matrix).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }),
        other => {
            eprintln!("Unknown format: {other} (expected 'json' or 'yaml')");
            std::process::exit(1);
        }
    };
    println!("{output}");
}

/// Handle the check command: the require-then-normalize sequence a parser
/// runs for every scanned construct
fn handle_check_command(dialect: &str, category: &str, token: &str) {
    let features = lookup_dialect(dialect);
    let category: Category = category.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let token: Token = token.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if let Err(e) = features.require(category, token) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    let (canonical_category, canonical_token) = normalize(category, token);
    println!("{category}:{token} -> {canonical_category}:{canonical_token}");
}
