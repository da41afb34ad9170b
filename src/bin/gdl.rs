//! Command-line interface for gdl
//!
//! Parses a grammar description file and prints its syntax tree, either as
//! flat trace lines (the default) or as a box-drawing tree with `--tree`.
//!
//! Usage:
//!   gdl `<path>`          - Print one trace line per node
//!   gdl `<path>` --tree   - Print the box-drawing tree rendering

use clap::{Arg, ArgAction, Command};
use gdl::{GrammarParser, TraceOptions};

fn main() {
    let matches = Command::new("gdl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a GDL grammar description and print its syntax tree")
        .arg(
            Arg::new("path")
                .help("Path to the grammar description file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tree")
                .long("tree")
                .help("Print the box-drawing tree instead of flat trace lines")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let trace = if matches.get_flag("tree") {
        TraceOptions::TREE
    } else {
        TraceOptions::NODES
    };

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let parser = GrammarParser::from_source(&source, trace).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let mut stdout = std::io::stdout();
    if let Err(e) = parser.print(&mut stdout) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
