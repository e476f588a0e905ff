use crate::functions::FunctionTable;

pub fn register(table: &mut FunctionTable) {
    table.register("abs", f64::abs);
    table.register("floor", f64::floor);
}
