use std::{io::Write, path::PathBuf};

use brew_core::runner::prelude::{run_source, LineOutcome};

const PROMPT: &str = ">>> ";

/// Read-eval-print loop: each input line goes through the whole
/// tokenizer, parser and evaluator pipeline.
pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();

    loop {
        let mut input = String::from("");

        print!("{}", PROMPT);
        std::io::stdout().flush()?;
        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {}
            ".exit" => return Ok(()),
            _ => {
                let report = run_source(&input);

                for line in report.lines {
                    match line.outcome {
                        LineOutcome::Evaluated(value) => println!("{value}"),
                        LineOutcome::Failed(error) => {
                            let buf_writer = crate::cli::stderr_buffer_writer();
                            let mut buf = buf_writer.buffer();

                            error
                                .into_error(PathBuf::from("<repl>"), report.src.clone())
                                .pretty(&mut buf);
                            buf_writer.print(&buf).expect("Writing error to stderr");
                        }
                        LineOutcome::Empty | LineOutcome::Skipped => {}
                    }
                }
            }
        }
    }
}
