use std::io::Write;

use brew_core::lexer::prelude::Lexer;

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
            _ => {
                let tokens = Lexer::new(&input, 0).tokenize();

                if tokens.is_empty() {
                    println!("(no tokens)");
                }

                for (start, token, end) in tokens {
                    println!("{token} @ {start}..{end}");
                }
            }
        }
    }
}
