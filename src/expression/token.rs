use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen
}

impl Token {
    pub fn describe(&self) -> String {
        match self {
            Token::Number(value) => format!("number '{}'", value),
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Plus => "'+'".to_owned(),
            Token::Minus => "'-'".to_owned(),
            Token::Star => "'*'".to_owned(),
            Token::Slash => "'/'".to_owned(),
            Token::Caret => "'^'".to_owned(),
            Token::LeftParen => "'('".to_owned(),
            Token::RightParen => "')'".to_owned()
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected character '{0}' in expression")]
    UnexpectedCharacter(char),

    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),

    #[error("unexpected {0}")]
    UnexpectedToken(String),

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unknown symbol '{0}': only 'x', 'pi', 'e' and the built-in functions are recognized")]
    UnknownSymbol(String)
}

/// Splits expression text into tokens. `**` is accepted as an alias
/// of `^` for exponentiation.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut position = 0;

    while position < chars.len() {
        let chr = chars[position];
        match chr {
            chr if chr.is_whitespace() => {
                position += 1;
            },
            '+' => {
                tokens.push(Token::Plus);
                position += 1;
            },
            '-' => {
                tokens.push(Token::Minus);
                position += 1;
            },
            '*' => {
                if position + 1 < chars.len() && chars[position + 1] == '*' {
                    tokens.push(Token::Caret);
                    position += 2;
                } else {
                    tokens.push(Token::Star);
                    position += 1;
                }
            },
            '/' => {
                tokens.push(Token::Slash);
                position += 1;
            },
            '^' => {
                tokens.push(Token::Caret);
                position += 1;
            },
            '(' => {
                tokens.push(Token::LeftParen);
                position += 1;
            },
            ')' => {
                tokens.push(Token::RightParen);
                position += 1;
            },
            chr if chr.is_ascii_digit() || chr == '.' => {
                let start = position;
                while position < chars.len() && (chars[position].is_ascii_digit() || chars[position] == '.') {
                    position += 1;
                }
                let literal: String = chars[start..position].iter().collect();
                let value = literal.parse::<f64>().map_err(|_| ParseError::InvalidNumber(literal))?;
                tokens.push(Token::Number(value));
            },
            chr if chr.is_ascii_alphabetic() || chr == '_' => {
                let start = position;
                while position < chars.len() && (chars[position].is_ascii_alphanumeric() || chars[position] == '_') {
                    position += 1;
                }
                let name: String = chars[start..position].iter().collect();
                tokens.push(Token::Ident(name));
            },
            other => {
                return Err(ParseError::UnexpectedCharacter(other));
            }
        }
    }

    Ok(tokens)
}
