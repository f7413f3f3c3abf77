use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use tally::{error::Error, Session};

/// tally is a tiny line-oriented calculator language for integer arithmetic
/// with variables and a PRINT statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read a script file and evaluate it line by line.
    #[arg(short, long)]
    file: bool,

    /// The command to evaluate. Starts an interactive prompt when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut session = Session::new();

    match args.contents {
        Some(contents) if args.file => {
            let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &contents);
                std::process::exit(1);
            });

            for (number, line) in script.lines().enumerate() {
                if let Err(e) = run_line(&mut session, line) {
                    eprintln!("line {}: {e}", number + 1);
                }
            }
        },
        Some(contents) => {
            if let Err(e) = run_line(&mut session, &contents) {
                eprintln!("{e}");
            }
        },
        None => prompt(&mut session),
    }
}

/// Evaluates one line and prints its output to stdout.
fn run_line(session: &mut Session, line: &str) -> Result<(), Error> {
    for output in session.eval_line(line)? {
        println!("{output}");
    }
    Ok(())
}

/// Runs the interactive prompt until an empty line or end of input.
///
/// A failed command is reported on stderr and the prompt keeps going.
fn prompt(session: &mut Session) {
    println!("tally {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut command = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        command.clear();
        match stdin.lock().read_line(&mut command) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let line = command.trim();
        if line.is_empty() {
            return;
        }

        if let Err(e) = run_line(session, line) {
            eprintln!("{e}");
        }
    }
}
