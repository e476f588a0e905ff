use crate::functions::FunctionTable;

pub fn register(table: &mut FunctionTable) {
    table.register("sin", f64::sin);
    table.register("cos", f64::cos);
    table.register("tan", f64::tan);
    table.register("asin", f64::asin);
    table.register("acos", f64::acos);
    table.register("atan", f64::atan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn table() -> FunctionTable {
        let mut table = FunctionTable::new();
        register(&mut table);
        table
    }

    #[test]
    fn test_trigonometric() {
        let table = table();
        assert_eq!(table.get("sin").unwrap()(0.0), 0.0);
        assert_eq!(table.get("cos").unwrap()(0.0), 1.0);
        assert!((table.get("tan").unwrap()(FRAC_PI_4) - 1.0).abs() < 1e-12);
        assert!((table.get("cos").unwrap()(PI) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_trigonometric() {
        let table = table();
        assert!((table.get("asin").unwrap()(1.0) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(table.get("acos").unwrap()(1.0), 0.0);
        assert!((table.get("atan").unwrap()(1.0) - FRAC_PI_4).abs() < 1e-12);
        assert!(table.get("asin").unwrap()(2.0).is_nan());
    }
}
