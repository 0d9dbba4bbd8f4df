//! Float helpers shared by the evaluators and their tests.

/// `Some(v)` when `v` is finite, `None` otherwise.
///
/// Property evaluation reports unavailable values as `None`, so intermediate
/// results are funneled through here instead of propagating NaN or infinity.
#[inline]
pub fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// A temperature usable inside `ln(T)` and `1/T` terms.
#[inline]
pub fn positive_finite(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

/// Absolute and relative tolerance for comparing property values.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// True when `a` and `b` agree within either tolerance.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_filters() {
        assert_eq!(finite(2.0), Some(2.0));
        assert_eq!(finite(f64::INFINITY), None);
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(positive_finite(0.0), None);
        assert_eq!(positive_finite(-3.0), None);
        assert_eq!(positive_finite(298.15), Some(298.15));
    }

    #[test]
    fn nearly_equal_uses_either_bound() {
        let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(nearly_equal(-241_826.0, -241_826.0001, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }
}
