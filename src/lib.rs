//! Evaluation of arithmetic expressions such as `2 * sin(x) ^ 2 - 1`.
//!
//! Text goes through three stages: [`rpn::tokenize`], [`rpn::convert`]
//! (shunting-yard, infix to postfix) and [`rpn::evaluate`]. [`Calculator`]
//! keeps a parsed expression together with its variables; [`evaluate`] does
//! everything in one call.

pub mod calculator;
pub mod config;
pub mod error;
pub mod functions;
pub mod rpn;

pub use calculator::{evaluate, evaluate_batch, evaluate_with_config, Calculator};
pub use config::{Config, UnknownVariables, UnrecognizedCharacters};
pub use error::{Error, EvalError, LexError, Result, SyntaxError};
pub use rpn::ParsedExpression;
