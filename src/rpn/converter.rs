use crate::error::SyntaxError;
use crate::rpn::{Operator, Separator, Token};
use log::{debug, trace};

/// Reorders infix tokens into postfix form (shunting-yard).
///
/// Two context decisions are made here and nowhere else:
/// * an identifier directly followed by `(` is a function call and is
///   emitted as [`Token::Function`] once its argument is closed;
/// * a `-` at the start, after another operator, or after `(` is unary and
///   becomes [`Operator::Negate`].
///
/// Parentheses never reach the output.
///
/// Hand-built token streams are accepted too: a [`Token::Function`] is
/// treated like a classified function name, and an explicit
/// [`Operator::Negate`] is stacked as unary minus without precedence checks.
pub fn convert(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token.clone()),

            Token::Identifier(name) => {
                if tokens.get(i + 1).is_some_and(Token::is_open) {
                    operators.push(Token::Function(name.clone()));
                } else {
                    output.push(token.clone());
                }
            }

            Token::Function(_) => operators.push(token.clone()),

            Token::Separator(Separator::Open) => operators.push(token.clone()),

            Token::Separator(Separator::Close) => {
                loop {
                    match operators.pop() {
                        None => return Err(SyntaxError::UnmatchedClosing),
                        Some(top) if top.is_open() => break,
                        Some(top) => output.push(top),
                    }
                }
                if matches!(operators.last(), Some(Token::Function(_))) {
                    output.extend(operators.pop());
                }
            }

            Token::Operator(op) => {
                if *op == Operator::Negate || is_unary_minus(tokens, i) {
                    trace!("unary minus at {i}");
                    operators.push(Token::Operator(Operator::Negate));
                    continue;
                }

                while let Some(top) = operators.last().and_then(stack_precedence) {
                    let pops = if op.is_right_associative() {
                        top > op.precedence()
                    } else {
                        top >= op.precedence()
                    };
                    if !pops {
                        break;
                    }
                    output.extend(operators.pop());
                }
                operators.push(token.clone());
            }
        }
    }

    while let Some(top) = operators.pop() {
        if let Token::Separator(_) = top {
            return Err(SyntaxError::UnmatchedOpening);
        }
        output.push(top);
    }

    debug!("postfix: {output:?}");
    Ok(output)
}

fn is_unary_minus(tokens: &[Token], i: usize) -> bool {
    if tokens[i] != Token::Operator(Operator::Subtract) {
        return false;
    }
    match i.checked_sub(1).map(|prev| &tokens[prev]) {
        None => true,
        Some(Token::Operator(_)) => true,
        Some(prev) => prev.is_open(),
    }
}

/// Precedence of a stacked entry, or `None` for `(` which stops popping.
fn stack_precedence(token: &Token) -> Option<u8> {
    match token {
        Token::Operator(op) => Some(op.precedence()),
        Token::Function(_) => Some(Operator::Power.precedence()),
        _ => None,
    }
}
