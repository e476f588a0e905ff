use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure while scanning raw expression text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("invalid number literal '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Failure while reordering tokens into postfix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("mismatched parentheses: '(' is never closed")]
    UnmatchedOpening,

    #[error("mismatched parentheses: ')' has no matching '('")]
    UnmatchedClosing,
}

/// Failure while running a postfix sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("stack underflow while applying '{token}'")]
    StackUnderflow { token: String },

    #[error("malformed expression: {remaining} values left on the stack, expected 1")]
    UnbalancedStack { remaining: usize },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("unexpected '{0}' in postfix expression")]
    UnexpectedToken(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
