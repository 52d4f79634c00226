use std::fmt::Display;

/// The five operator keywords of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,         // sprinkles
    Subtract,    // ice
    Multiply,    // caffeine
    Divide,      // frappe
    Concatenate, // sips
}

impl BinaryOp {
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "sprinkles" => Self::Add,
            "ice" => Self::Subtract,
            "caffeine" => Self::Multiply,
            "frappe" => Self::Divide,
            "sips" => Self::Concatenate,
            _ => return None,
        })
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Self::Add => "sprinkles",
            Self::Subtract => "ice",
            Self::Multiply => "caffeine",
            Self::Divide => "frappe",
            Self::Concatenate => "sips",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter|_>{<letter>|<digit>|_}, also the boolean keyword `isDecaf`
    Ident(String),
    // [-]{<digit>}[.{<digit>}]
    Number(f64),
    // * enclosed text *
    Str(String),
    // sprinkles | ice | caffeine | frappe | sips
    Operator(BinaryOp),
    // ~
    Equals,
    // <name>({)
    EndOfCommand(String),
    // \_/ enclosed code \_/  (reserved, never evaluated)
    Block(String),
    // the standalone print keyword
    Order,
}

impl Token {
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Ident(_) => "IDENTIFIER",
            Token::Number(_) => "NUMBER",
            Token::Str(_) => "STRING",
            Token::Operator(_) => "OPERATOR",
            Token::Equals => "EQUALS",
            Token::EndOfCommand(_) => "ENDOFCOMMAND",
            Token::Block(_) => "BLOCK",
            Token::Order => "ORDER",
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Number(value) => format!("{value}"),
            Token::Str(value) => value.clone(),
            Token::Operator(op) => op.as_literal().to_string(),
            Token::Equals => "~".to_string(),
            Token::EndOfCommand(name) => format!("{name}({{)"),
            Token::Block(body) => body.clone(),
            Token::Order => "order".to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind(), self.as_literal())
    }
}
