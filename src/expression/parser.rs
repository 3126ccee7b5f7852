use std::f64::consts;

use super::ast::Expr;
use super::function::Function;
use super::token::{
    ParseError,
    Token,
    tokenize
};

/// Parses expression text over the free variable `x` into an [`Expr`].
///
/// Precedence, loosest to tightest: `+ -`, `* /`, unary minus, `^`
/// (right-associative). Identifiers other than `x`, `pi`, `e` and the
/// built-in function names are rejected, as is any trailing input.
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, position: 0 };
    let expr = parser.parse_additive()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedToken(token.describe()))
    }
}

struct Parser {
    tokens: Vec<Token>,
    position: usize
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect_right_paren(&mut self) -> Result<(), ParseError> {
        match self.advance() {
            Some(Token::RightParen) => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken(token.describe())),
            None => Err(ParseError::UnexpectedEnd)
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.position += 1;
                    let rhs = self.parse_multiplicative()?;
                    lhs = Expr::add(lhs, rhs);
                },
                Some(Token::Minus) => {
                    self.position += 1;
                    let rhs = self.parse_multiplicative()?;
                    lhs = Expr::sub(lhs, rhs);
                },
                _ => return Ok(lhs)
            }
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.position += 1;
                    let rhs = self.parse_unary()?;
                    lhs = Expr::mul(lhs, rhs);
                },
                Some(Token::Slash) => {
                    self.position += 1;
                    let rhs = self.parse_unary()?;
                    lhs = Expr::div(lhs, rhs);
                },
                _ => return Ok(lhs)
            }
        }
    }

    // Unary minus binds looser than `^`, so -x^2 parses as -(x^2).
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.position += 1;
                let operand = self.parse_unary()?;
                Ok(Expr::neg(operand))
            },
            Some(Token::Plus) => {
                self.position += 1;
                self.parse_unary()
            },
            _ => self.parse_power()
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_atom()?;
        match self.peek() {
            Some(Token::Caret) => {
                self.position += 1;
                // Right-associative; the exponent may itself be signed.
                let exponent = self.parse_unary()?;
                Ok(Expr::pow(base, exponent))
            },
            _ => Ok(base)
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::constant(value)),
            Some(Token::LeftParen) => {
                let inner = self.parse_additive()?;
                self.expect_right_paren()?;
                Ok(inner)
            },
            Some(Token::Ident(name)) => self.parse_ident(name),
            Some(token) => Err(ParseError::UnexpectedToken(token.describe())),
            None => Err(ParseError::UnexpectedEnd)
        }
    }

    fn parse_ident(&mut self, name: String) -> Result<Expr, ParseError> {
        match name.as_str() {
            "x" => Ok(Expr::variable()),
            "pi" => Ok(Expr::constant(consts::PI)),
            "e" => Ok(Expr::constant(consts::E)),
            _ => {
                let function = Function::from_name(&name).ok_or(ParseError::UnknownSymbol(name))?;
                match self.advance() {
                    Some(Token::LeftParen) => {
                        let argument = self.parse_additive()?;
                        self.expect_right_paren()?;
                        Ok(Expr::call(function, argument))
                    },
                    Some(token) => Err(ParseError::UnexpectedToken(token.describe())),
                    None => Err(ParseError::UnexpectedEnd)
                }
            }
        }
    }
}
