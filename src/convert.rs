//! Host number conversion
//!
//! Hosts hand every numeric argument over as a double. The core works on
//! 32-bit signed integers, so each argument is truncated toward zero first.

use crate::error::{CoreError, CoreResult};

/// Truncate a host number toward zero into an `i32`.
///
/// `3.9 -> 3`, `-3.9 -> -3`, `-0.5 -> 0`. NaN, infinities and values whose
/// integer part does not fit in an `i32` are rejected rather than saturated.
pub fn truncate_arg(op: &'static str, x: f64) -> CoreResult<i32> {
    if !x.is_finite() {
        return Err(CoreError::domain(op, format!("argument {} is not a finite number", x)));
    }

    let t = x.trunc();
    if t < i32::MIN as f64 || t > i32::MAX as f64 {
        return Err(CoreError::domain(
            op,
            format!("argument {} is outside the 32-bit integer range", x),
        ));
    }

    Ok(t as i32)
}

/// Widen an integer result back to the host number type.
///
/// Every value the kernel returns through here is at most 2^53 in magnitude,
/// so the conversion is exact.
pub fn to_host(n: i64) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(truncate_arg("t", 3.9).unwrap(), 3);
        assert_eq!(truncate_arg("t", -3.9).unwrap(), -3);
        assert_eq!(truncate_arg("t", 2.9).unwrap(), 2);
        assert_eq!(truncate_arg("t", -0.5).unwrap(), 0);
        assert_eq!(truncate_arg("t", 0.0).unwrap(), 0);
        assert_eq!(truncate_arg("t", 7.0).unwrap(), 7);
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(truncate_arg("t", 2147483647.9).unwrap(), i32::MAX);
        assert_eq!(truncate_arg("t", -2147483648.9).unwrap(), i32::MIN);
        assert!(truncate_arg("t", 2147483648.0).is_err());
        assert!(truncate_arg("t", -2147483649.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            truncate_arg("add", f64::NAN),
            Err(CoreError::Domain { op: "add", .. })
        ));
        assert!(truncate_arg("add", f64::INFINITY).is_err());
        assert!(truncate_arg("add", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_to_host_is_exact() {
        assert_eq!(to_host(8944394323791464), 8944394323791464.0);
        assert_eq!(to_host(-5), -5.0);
    }
}
