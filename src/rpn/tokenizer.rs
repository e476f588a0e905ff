use crate::config::UnrecognizedCharacters;
use crate::error::LexError;
use crate::rpn::{Operator, Separator, Token};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    ScanningNumber,
    ScanningIdentifier,
}

/// Splits `text` into infix tokens.
///
/// Every `-` becomes an operator token here; whether it negates or subtracts
/// is decided by the converter. Identifiers are not yet classified as
/// variables or functions.
pub fn tokenize(
    text: &str,
    unrecognized: UnrecognizedCharacters,
) -> Result<Vec<Token>, LexError> {
    // The trailing blank flushes whatever token is still being scanned.
    let chars: Vec<char> = text.chars().chain(std::iter::once(' ')).collect();

    let mut tokens = Vec::new();
    let mut state = State::Idle;
    let mut buffer = String::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        match state {
            State::Idle => {
                if let Some(op) = scan_operator(c) {
                    tokens.push(Token::Operator(op));
                } else if c == '(' {
                    tokens.push(Token::Separator(Separator::Open));
                } else if c == ')' {
                    tokens.push(Token::Separator(Separator::Close));
                } else if c.is_ascii_digit() || c == '.' {
                    state = State::ScanningNumber;
                    buffer.clear();
                    buffer.push(c);
                    start = pos;
                } else if c.is_ascii_alphabetic() {
                    state = State::ScanningIdentifier;
                    buffer.clear();
                    buffer.push(c);
                    start = pos;
                } else if !c.is_whitespace() {
                    match unrecognized {
                        UnrecognizedCharacters::Ignore => {
                            trace!("skipping '{c}' at {pos}");
                        }
                        UnrecognizedCharacters::Reject => {
                            return Err(LexError::UnexpectedCharacter {
                                character: c,
                                position: pos,
                            });
                        }
                    }
                }
                pos += 1;
            }
            State::ScanningNumber => {
                let continues = c.is_ascii_digit()
                    || c == '.'
                    || c == 'e'
                    || (c == '-' && buffer.ends_with('e'));
                if continues {
                    buffer.push(c);
                    pos += 1;
                } else {
                    let value = buffer
                        .parse::<f64>()
                        .map_err(|_| LexError::InvalidNumber {
                            literal: buffer.clone(),
                            position: start,
                        })?;
                    tokens.push(Token::Number(value));
                    state = State::Idle;
                }
            }
            State::ScanningIdentifier => {
                if c.is_ascii_alphanumeric() {
                    buffer.push(c);
                    pos += 1;
                } else {
                    tokens.push(Token::Identifier(std::mem::take(&mut buffer)));
                    state = State::Idle;
                }
            }
        }
    }

    debug!("tokens: {tokens:?}");
    Ok(tokens)
}

fn scan_operator(c: char) -> Option<Operator> {
    match c {
        '+' => Some(Operator::Add),
        '-' => Some(Operator::Subtract),
        '*' => Some(Operator::Multiply),
        '/' => Some(Operator::Divide),
        '^' => Some(Operator::Power),
        _ => None,
    }
}
