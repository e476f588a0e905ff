pub mod exponential;
pub mod other;
pub mod trigonometric;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A built-in unary math function.
pub type Function = fn(f64) -> f64;

/// The built-in table, built on first use and shared read-only by every
/// calculator.
pub static BUILTINS: Lazy<FunctionTable> = Lazy::new(FunctionTable::builtin);

/// Name to function mapping consulted when a call is evaluated.
///
/// Entries can only be added from inside the crate, so the table is fixed
/// once built.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<&'static str, Function>,
}

impl FunctionTable {
    pub(crate) fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// abs, acos, asin, atan, cos, exp, floor, ln, log, sin, sqrt, tan.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        register_functions(&mut table);
        table
    }

    pub(crate) fn register(&mut self, name: &'static str, function: Function) {
        self.functions.insert(name, function);
    }

    pub fn get(&self, name: &str) -> Option<Function> {
        self.functions.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }
}

pub fn register_functions(table: &mut FunctionTable) {
    trigonometric::register(table);
    exponential::register(table);
    other::register(table);
}
