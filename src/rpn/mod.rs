use crate::config::Config;
use crate::error::Result;
use std::fmt;

mod converter;
mod evaluator;
mod tokenizer;

pub use converter::convert;
pub use evaluator::evaluate;
pub use tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// A name as written. In infix form it may still turn out to be a
    /// function name; in postfix form it is always a variable reference.
    Identifier(String),
    /// A function application. Only produced by the converter.
    Function(String),
    Operator(Operator),
    Separator(Separator),
}

impl Token {
    pub fn is_open(&self) -> bool {
        matches!(self, Token::Separator(Separator::Open))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Identifier(name) | Token::Function(name) => f.write_str(name),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Separator(sep) => write!(f, "{}", sep.symbol()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Unary minus, written `_` in postfix form.
    Negate,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Negate => '_',
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power | Operator::Negate => 3,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Power)
    }

    /// Applies the operator to `left` and `right`. `Negate` is unary and
    /// only looks at `right`. Division follows IEEE-754, so `x / 0` is an
    /// infinity or NaN rather than an error.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => power(left, right),
            Operator::Negate => -right,
        }
    }
}

/// `x1 ^ x2`. Every exponent, including `2`, goes through `powf`, so `x^2`
/// and `x^2.0` are bit-for-bit identical to general exponentiation.
pub fn power(x1: f64, x2: f64) -> f64 {
    x1.powf(x2)
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            '_' => Ok(Operator::Negate),
            other => Err(other),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    Open,
    Close,
}

impl Separator {
    pub fn symbol(&self) -> char {
        match self {
            Separator::Open => '(',
            Separator::Close => ')',
        }
    }
}

/// An expression already reordered into postfix form, ready to be computed
/// any number of times.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedExpression {
    postfix: Vec<Token>,
}

impl ParsedExpression {
    /// Tokenizes `expression` and converts it to postfix.
    pub fn parse(expression: &str, config: &Config) -> Result<Self> {
        let infix = tokenize(expression, config.unrecognized_characters)?;
        let postfix = convert(&infix)?;
        Ok(Self { postfix })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.postfix
    }
}

impl From<Vec<Token>> for ParsedExpression {
    fn from(postfix: Vec<Token>) -> Self {
        Self { postfix }
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
