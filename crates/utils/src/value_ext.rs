use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// Rust prints `1e-3` where MCNP prints `1.00000E-03`, which makes any
    /// side-by-side comparison with the report painful. This gives a fixed
    /// mantissa precision and always signs and pads the exponent.
    ///
    /// ```rust
    /// # use mcpost_utils::ValueExt;
    /// assert_eq!(1.23456e-3_f64.sci(5, 2), "1.23456e-03".to_string());
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(4188.79_f64.sci(3, 3), "4.189e+003".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self, precision = precision);
        // LowerExp always writes an 'e', but fall back to the raw string anyway
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
