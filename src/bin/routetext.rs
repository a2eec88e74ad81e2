//! Command-line interface for routetext
//! Compiles a single OSRM route step (as JSON) into instruction text.
//!
//! Usage:
//!   routetext `<path>` [--version `<version>`] [--language `<path>`]
//!
//! The file holds one route step object, the same shape OSRM returns inside
//! `routes[].legs[].steps[]`.

use clap::{Arg, Command};
use routetext::osrm::{FormatOptions, InstructionFormatter, Language, RouteStep};

fn main() {
    let matches = Command::new("routetext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compiles OSRM route steps into instruction text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to a JSON file holding one route step")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("osrm-version")
                .long("osrm-version")
                .help("Version table to use in the language data")
                .default_value("v5"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Path to a language JSON file (default: bundled English)"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let version = matches
        .get_one::<String>("osrm-version")
        .expect("osrm-version has a default value");

    let language = match matches.get_one::<String>("language") {
        Some(language_path) => {
            let json = read_file(language_path);
            Language::from_json_str(&json).unwrap_or_else(|e| {
                eprintln!("Error loading language file {}: {}", language_path, e);
                std::process::exit(1);
            })
        }
        None => Language::english().clone(),
    };

    let formatter = InstructionFormatter::new(version, &language).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let json = read_file(path);
    let step: RouteStep = serde_json::from_str(&json).unwrap_or_else(|e| {
        eprintln!("Error parsing step {}: {}", path, e);
        std::process::exit(1);
    });

    let instruction = formatter
        .format(&step, &FormatOptions::default())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    match instruction {
        Some(text) => println!("{}", text),
        None => {
            eprintln!("Step produces no instruction (no maneuver modifier)");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}
