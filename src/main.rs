use std::{
    fs,
    io::{BufRead, Write},
};

use clap::Parser;
use numera::{interpreter::evaluator::core::Context, report::render_error, run};

/// numera is an easy to use, domain-specific language for numeric
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to evaluate; omit it to start an interactive shell.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            let (source_name, script) = if args.file {
                let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                });
                (contents, script)
            } else {
                ("<stdin>".to_string(), contents)
            };

            let mut context = Context::root("<program>");
            match run(&script, &mut context) {
                Ok(value) => println!("{value}"),
                Err(error) => {
                    eprintln!("{}", render_error(&source_name, &script, &error));
                    std::process::exit(1);
                },
            }
        },
        None => shell(),
    }
}

/// Runs the interactive shell.
///
/// Reads one expression per line against a single context, so variables
/// persist between lines. The shell exits on end-of-input.
fn shell() {
    println!("numera interactive shell. Press Ctrl+D to exit.");

    let mut context = Context::root("<program>");
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("numera > ");
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let source = line.trim_end_matches('\n');
        if source.trim().is_empty() {
            continue;
        }

        match run(source, &mut context) {
            Ok(value) => println!("{value}"),
            Err(error) => eprintln!("{}", render_error("<stdin>", source, &error)),
        }
    }
}
