use std::io::Write;

use brew_core::parser::prelude::parse_line;

const PROMPT: &str = ">> ";

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
            _ => match parse_line(&input, 0) {
                Ok(Some(expression)) => println!("{expression}"),
                Ok(None) => println!("(nothing to parse)"),
                Err(err) => {
                    let (message, messages) = err.details();

                    if messages.is_empty() {
                        println!("Parse error: {}.", message);
                    } else {
                        println!("Parse error: {}.\n\t{}", message, messages.join(";\n\t"));
                    }
                }
            },
        }
    }
}
