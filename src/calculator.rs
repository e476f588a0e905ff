use crate::config::Config;
use crate::error::Result;
use crate::functions::{FunctionTable, BUILTINS};
use crate::rpn::{self, ParsedExpression};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;
use std::f64::consts::{E, PI};

/// One parsed expression plus the variables it is computed against.
///
/// Variables start out with `e` and `pi`; [`set`](Calculator::set) adds or
/// overrides entries. Names are case-sensitive.
///
/// ```
/// use rpn_calc::Calculator;
///
/// let mut calc = Calculator::from_expression("r^2 * pi").unwrap();
/// calc.set("r", 2.0);
/// assert!((calc.compute().unwrap() - 12.566370614359172).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    config: Config,
    expression: ParsedExpression,
    variables: HashMap<String, f64>,
    functions: &'static FunctionTable,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let variables = HashMap::from([("e".to_string(), E), ("pi".to_string(), PI)]);
        Self {
            config,
            expression: ParsedExpression::default(),
            variables,
            functions: &BUILTINS,
        }
    }

    /// Creates a calculator with default settings and parses `expression`.
    pub fn from_expression(expression: &str) -> Result<Self> {
        let mut calculator = Self::new();
        calculator.parse(expression)?;
        Ok(calculator)
    }

    /// Parses `expression`, replacing the previously parsed one.
    ///
    /// On failure the previous expression is left untouched.
    pub fn parse(&mut self, expression: &str) -> Result<&mut Self> {
        let parsed = ParsedExpression::parse(expression, &self.config)?;
        debug!("parsed '{expression}' as '{parsed}'");
        self.expression = parsed;
        Ok(self)
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.variables.insert(name.into(), value);
        self
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn expression(&self) -> &ParsedExpression {
        &self.expression
    }

    /// Computes the parsed expression against the current variables.
    ///
    /// Nothing is mutated, so calling this twice gives the same result.
    /// Computing before anything was parsed fails with an unbalanced stack.
    pub fn compute(&self) -> Result<f64> {
        let value = rpn::evaluate(
            self.expression.tokens(),
            &self.variables,
            self.functions,
            self.config.unknown_variables,
        )?;
        Ok(value)
    }
}

/// Parses and computes `expression` in one go, with `variables` bound on
/// top of `e` and `pi`.
///
/// Variables that are referenced but not bound evaluate to `0.0`; use
/// [`evaluate_with_config`] with [`Config::reject_unknown_variables`] to
/// make that an error instead.
pub fn evaluate(expression: &str, variables: &HashMap<String, f64>) -> Result<f64> {
    evaluate_with_config(expression, variables, Config::default())
}

pub fn evaluate_with_config(
    expression: &str,
    variables: &HashMap<String, f64>,
    config: Config,
) -> Result<f64> {
    let mut calculator = Calculator::with_config(config);
    for (name, value) in variables {
        calculator.set(name.clone(), *value);
    }
    calculator.parse(expression)?.compute()
}

/// Computes one expression against many variable sets in parallel.
///
/// The expression is parsed once; a parse error fails the whole batch.
/// Each context then runs on its own copy of the calculator.
pub fn evaluate_batch(
    expression: &str,
    contexts: &[HashMap<String, f64>],
) -> Result<Vec<Result<f64>>> {
    let template = Calculator::from_expression(expression)?;
    debug!("evaluating '{expression}' over {} contexts", contexts.len());

    Ok(contexts
        .par_iter()
        .map(|context| {
            let mut calculator = template.clone();
            for (name, value) in context {
                calculator.set(name.clone(), *value);
            }
            calculator.compute()
        })
        .collect())
}
