use super::token::{BinaryOp, Token};

pub type Spanned = (u32, Token, u32);

/// Tokenizes a single logical line. Spans are absolute offsets into the
/// whole source, shifted by `base`.
#[derive(Debug)]
pub struct Lexer<'src> {
    line: &'src str,
    base: u32,
    position: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(line: &'src str, base: u32) -> Self {
        Self {
            line,
            base,
            position: 0,
        }
    }

    pub fn tokenize(mut self) -> Vec<Spanned> {
        let mut tokens = vec![];

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    fn next_token(&mut self) -> Option<Spanned> {
        loop {
            self.skip_whitespace();
            let start = self.position;
            let ch = self.peek()?;

            let token = if ch == '*' {
                match self.lex_string() {
                    Some(token) => Some(token),
                    None => {
                        // Unterminated string marker. The rest of the word
                        // can never classify, so it is consumed and dropped.
                        let _ = self.read_raw_word();
                        None
                    }
                }
            } else {
                let word = self.read_word();
                classify(word).map(|token| self.spanned(start, token))
            };

            match token {
                Some(token) => return Some(token),
                // Words matching no classification rule are dropped silently.
                None => continue,
            }
        }
    }

    fn spanned(&self, start: usize, token: Token) -> Spanned {
        (
            self.base + start as u32,
            token,
            self.base + self.position as u32,
        )
    }

    fn peek(&self) -> Option<char> {
        self.line[self.position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.position += ch.len_utf8();
        }
    }

    /// Reads until whitespace or a string marker, so `foo*bar*` splits
    /// into the word `foo` followed by the string `bar`.
    fn read_word(&mut self) -> &'src str {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '*' {
                break;
            }
            self.position += ch.len_utf8();
        }

        &self.line[start..self.position]
    }

    /// Reads until whitespace, string markers included.
    fn read_raw_word(&mut self) -> &'src str {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                break;
            }
            self.position += ch.len_utf8();
        }

        &self.line[start..self.position]
    }

    /// `*` delimited string literal. The markers are excluded from the
    /// token value. Returns `None` when the closing marker is missing
    /// on this line.
    fn lex_string(&mut self) -> Option<Spanned> {
        let start = self.position;
        let rest = &self.line[self.position + 1..];
        let close = rest.find('*')?;

        let value = rest[..close].to_string();
        self.position += close + 2;

        Some(self.spanned(start, Token::Str(value)))
    }
}

/// Single ranked word classification. Rules are mutually exclusive and
/// tested in order, first match wins:
///
///   1. decorated command invocation `name({)`
///   2. code block marker `\_/ ... \_/`
///   3. assignment marker `~`
///   4. numeric literal (before identifiers, so numbers never
///      classify as identifier-shaped words)
///   5. the boolean keyword `isDecaf` (identifier class, inert)
///   6. operator keywords
///   7. the standalone print keyword `order`
///   8. bare identifier
///
/// A word matching none of the rules yields `None` and is dropped.
fn classify(word: &str) -> Option<Token> {
    if let Some(name) = word.strip_suffix("({)") {
        if !name.is_empty() {
            return Some(Token::EndOfCommand(name.to_string()));
        }
    }

    if let Some(body) = word
        .strip_prefix("\\_/")
        .and_then(|rest| rest.strip_suffix("\\_/"))
    {
        return Some(Token::Block(body.to_string()));
    }

    if word.contains('~') {
        return Some(Token::Equals);
    }

    if let Some(value) = parse_number(word) {
        return Some(Token::Number(value));
    }

    if word == "isDecaf" {
        return Some(Token::Ident(word.to_string()));
    }

    if let Some(op) = BinaryOp::from_keyword(word) {
        return Some(Token::Operator(op));
    }

    if word == "order" {
        return Some(Token::Order);
    }

    if is_identifier(word) {
        return Some(Token::Ident(word.to_string()));
    }

    None
}

// [-]{<digit>}[.{<digit>}]
fn parse_number(word: &str) -> Option<f64> {
    let unsigned = word.strip_prefix('-').unwrap_or(word);

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Some(frac_part) = frac_part {
        if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    word.parse().ok()
}

// <letter|_>{<letter>|<digit>|_}
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
