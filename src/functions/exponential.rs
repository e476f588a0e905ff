use crate::functions::FunctionTable;

/// `ln` is the natural logarithm, `log` is base 10.
pub fn register(table: &mut FunctionTable) {
    table.register("exp", f64::exp);
    table.register("ln", f64::ln);
    table.register("log", f64::log10);
    table.register("sqrt", f64::sqrt);
}
