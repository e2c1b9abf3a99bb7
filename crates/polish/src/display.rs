//! Result formatting

/// Format an evaluation result for output.
///
/// Finite values always carry a fractional part (`3` prints as `3.0`),
/// so integer-looking results still read as floating point. Non-finite
/// values print as `inf`, `-inf`, and `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        // Debug keeps the trailing `.0` that Display drops
        format!("{:?}", value)
    }
}
