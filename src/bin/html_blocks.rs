//! CLI that reads HTML from a file or stdin and prints either the cleaned
//! HTML or the block JSON to stdout.
//!
//! Usage: `html_blocks [--clean | --blocks] [FILE]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::process;

use html_blocks::{clean, html_to_editor_json};

enum Mode {
    Clean,
    Blocks,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut mode = Mode::Blocks;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--clean" => mode = Mode::Clean,
            "--blocks" => mode = Mode::Blocks,
            "-h" | "--help" => {
                println!("Usage: html_blocks [--clean | --blocks] [FILE]");
                return;
            }
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("Unexpected argument: {arg}");
                process::exit(2);
            }
        }
    }

    let html = match read_input(path.as_deref()) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            process::exit(1);
        }
    };

    let output = match mode {
        Mode::Clean => clean(&html),
        Mode::Blocks => html_to_editor_json(&html),
    };
    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Conversion failed: {e}");
            process::exit(1);
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut html = String::new();
            io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
    }
}
