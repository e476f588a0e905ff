use crate::config::UnknownVariables;
use crate::error::EvalError;
use crate::functions::FunctionTable;
use crate::rpn::{Operator, Token};
use log::{debug, trace};
use std::collections::HashMap;

/// Runs a postfix sequence on an operand stack.
///
/// The stack is local to the call, so the same postfix can be evaluated
/// repeatedly or from several threads. Fails if an operator finds too few
/// operands or if anything other than exactly one value is left at the end.
pub fn evaluate(
    postfix: &[Token],
    variables: &HashMap<String, f64>,
    functions: &FunctionTable,
    unknown: UnknownVariables,
) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(value) => operands.push(*value),

            Token::Identifier(name) => {
                let value = match variables.get(name) {
                    Some(value) => *value,
                    None => match unknown {
                        UnknownVariables::Zero => {
                            debug!("variable '{name}' is not set, using 0");
                            0.0
                        }
                        UnknownVariables::Reject => {
                            return Err(EvalError::UnknownVariable(name.clone()))
                        }
                    },
                };
                trace!("load {name} = {value}");
                operands.push(value);
            }

            Token::Function(name) => {
                let function = functions
                    .get(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                let top = operands.last_mut().ok_or_else(|| underflow(token))?;
                trace!("call {name}({top})");
                *top = function(*top);
            }

            Token::Operator(op @ Operator::Negate) => {
                let top = operands.last_mut().ok_or_else(|| underflow(token))?;
                *top = op.apply(0.0, *top);
            }

            Token::Operator(op) => {
                let right = operands.pop().ok_or_else(|| underflow(token))?;
                let left = operands.last_mut().ok_or_else(|| underflow(token))?;
                trace!("{left} {} {right}", op.symbol());
                *left = op.apply(*left, right);
            }

            Token::Separator(_) => return Err(EvalError::UnexpectedToken(token.to_string())),
        }
    }

    match operands.as_slice() {
        [result] => {
            debug!("result: {result}");
            Ok(*result)
        }
        _ => Err(EvalError::UnbalancedStack {
            remaining: operands.len(),
        }),
    }
}

fn underflow(token: &Token) -> EvalError {
    EvalError::StackUnderflow {
        token: token.to_string(),
    }
}
