use log::debug;
use rpn_calc::{Calculator, Config};
use std::env;

/// Evaluates the expression given on the command line, with `name=value`
/// arguments bound as variables.
///
/// `RUST_LOG=debug cargo run --example simple_expression -- "2 * r ^ 2" r=3`
fn main() {
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let expr = args.next().unwrap_or_else(|| "-2^2 + sqrt(16) * pi".to_string());

    let mut calc = Calculator::with_config(Config::new().reject_unknown_variables());
    for binding in args {
        match binding.split_once('=').map(|(name, value)| (name, value.parse::<f64>())) {
            Some((name, Ok(value))) => {
                calc.set(name, value);
            }
            _ => {
                eprintln!("ignoring '{binding}', expected name=value");
            }
        }
    }

    match calc.parse(&expr) {
        Ok(parsed) => {
            debug!("postfix: {}", parsed.expression());
            match parsed.compute() {
                Ok(result) => println!("{expr} = {result}"),
                Err(err) => eprintln!("Error: {err}"),
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
