mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;

use brew_core::runner::prelude::{run_file, write_trace, LineOutcome, RunReport};
use brew_core::utils::prelude::Error;

#[derive(Parser)]
enum Command {
    /// Tokenizes, parses and evaluates a source file line by line
    Run {
        /// Path of source file
        path: PathBuf,
        /// Print the input, tokens, tree and result of each line
        #[arg(short, long, default_value_t = false)]
        debug: bool,
        /// Write a JSON trace of the run to this file
        #[arg(long, value_name = "FILE")]
        trace: Option<PathBuf>,
        /// Mark accumulated string output as takeaway
        #[arg(long, default_value_t = false)]
        with_legs: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl,
    /// Runs Read Eval Print Loop
    Repl,
}

fn main() {
    match Command::parse() {
        Command::Run {
            path,
            debug,
            trace,
            with_legs,
        } => run(path, debug, trace, with_legs),
        Command::Rlpl => {
            install_interrupt_handler();
            let _ = rlpl::start();
        }
        Command::Rppl => {
            install_interrupt_handler();
            let _ = rppl::start();
        }
        Command::Repl => {
            install_interrupt_handler();
            let _ = repl::start();
        }
    }
}

fn run(path: PathBuf, debug: bool, trace: Option<PathBuf>, with_legs: bool) {
    cli::print_brewing(&path.to_string_lossy());
    let start = std::time::Instant::now();

    let report = match run_file(path.clone(), with_legs) {
        Ok(report) => report,
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    };

    print_report(&report, &path, debug);

    if let Some(trace_path) = trace {
        if let Err(err) = write_trace(&trace_path, &report.to_trace()) {
            print_error(&Error::StdIo { err: err.kind() });
            std::process::exit(1);
        }
    }

    cli::print_brewed(std::time::Instant::now() - start);

    if report.has_failures() {
        std::process::exit(1);
    }
}

fn print_report(report: &RunReport, path: &PathBuf, debug: bool) {
    for line in &report.lines {
        if line.outcome == LineOutcome::Skipped {
            continue;
        }

        if debug {
            println!("\n--------INPUT--------");
            println!("{}", line.source);

            println!("\n--------TOKENS--------");
            for (_, token, _) in &line.tokens {
                println!("{token}");
            }

            println!("\n--------AST--------");
            if let Some(expression) = &line.expression {
                println!("{expression}");
            }
        }

        match &line.outcome {
            LineOutcome::Evaluated(value) => {
                if debug {
                    println!("\n--------RESULT--------");
                    println!(" The result of your line of code is: {value}\n");
                } else {
                    println!("{value}");
                }
            }
            LineOutcome::Failed(error) => {
                let error = error
                    .clone()
                    .into_error(path.clone(), report.src.clone());
                print_error(&error);
            }
            LineOutcome::Empty | LineOutcome::Skipped => {}
        }
    }
}

fn print_error(error: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    error.pretty(&mut buf);
    buf_writer.print(&buf).expect("Writing error to stderr");
}

fn install_interrupt_handler() {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })
    .expect("setting interrupt handler");
}
