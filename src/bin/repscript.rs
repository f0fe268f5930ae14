//! Command-line interface for repscript
//! Parses workout notation from a file (or stdin) and prints the result.
//!
//! Usage:
//!   repscript <path>                - Parse a notation file, print JSON
//!   repscript <path> --format text  - Print a readable summary instead
//!   repscript -                     - Read notation from stdin

use clap::{Arg, Command};
use repscript::notation::parsing::parse;
use repscript::{GroupKind, ParseResult};
use std::io::Read;

fn main() {
    let matches = Command::new("repscript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A parser for free-text workout notation")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the notation file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json or text")
                .default_value("json"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").unwrap();

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let result = parse(&source);
    match format.as_str() {
        "json" => {
            let rendered = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                eprintln!("Error serializing result: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        "text" => print_summary(&result),
        other => {
            eprintln!("Unknown format '{}'; expected json or text", other);
            std::process::exit(1);
        }
    }
    if !result.success {
        std::process::exit(2);
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

fn print_summary(result: &ParseResult) {
    if let Some(workout) = &result.workout {
        for (i, group) in workout.groups.iter().enumerate() {
            let label = match group.kind {
                GroupKind::Single => "",
                GroupKind::Superset => " [superset]",
                GroupKind::Circuit => " [circuit]",
                GroupKind::Dropset => " [dropset]",
                GroupKind::Cluster => " [cluster]",
            };
            println!("Group {}{}", i + 1, label);
            for exercise in &group.exercises {
                let reps: Vec<String> = exercise.sets.iter().map(|s| s.reps.to_string()).collect();
                println!("  {} - {} sets ({})", exercise.name, exercise.sets.len(), reps.join(", "));
            }
        }
    }
    for error in &result.errors {
        eprintln!("{}", error);
    }
    for suggestion in &result.suggestions {
        eprintln!(
            "did you mean: {:?} -> {:?} ({:.0}%)",
            suggestion.original,
            suggestion.suggestion,
            suggestion.confidence * 100.0
        );
    }
}
