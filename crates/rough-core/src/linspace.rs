//! Evenly spaced points over an interval.
//!
//! The spacing between consecutive points is `(end - start) / (count - 1)`.
//! Bounds given in the wrong order are swapped at construction, so the
//! output is always non-decreasing. The spacing arithmetic guards against
//! integer overflow in the scaled-product evaluation path and falls back to
//! a floating-point-only formula; the fallback is a correctness property,
//! not a performance one, and both paths agree in the non-overflowing case.

use crate::error::SurfaceError;

/// An immutable interval-and-count specification. `generate` is a pure
/// function of this state; instances are safe to share across call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace {
    start: f64,
    end: f64,
    count: usize,
}

impl Linspace {
    /// Build a linspace over `[start, end]` with `count` points.
    ///
    /// Swaps the bounds when `start > end`. Fails with
    /// [`SurfaceError::InvalidArgument`] when `count < 1`: the interval
    /// count is `count - 1`, and an unchecked subtraction here would
    /// silently wrap instead of surfacing the bad input.
    pub fn new(start: f64, end: f64, count: usize) -> Result<Self, SurfaceError> {
        if count < 1 {
            return Err(SurfaceError::invalid(format!(
                "linspace requires at least 1 point, got {count}"
            )));
        }
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        Ok(Self { start, end, count })
    }

    /// Normalized lower bound.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Normalized upper bound.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of points produced by [`generate`](Self::generate).
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Produce the `count` points.
    ///
    /// `result[0] == start` and `result[count-1] == end` up to rounding,
    /// with uniform spacing between consecutive points. A single-point
    /// linspace yields `[start]` without touching the spacing formula.
    pub fn generate(&self) -> Vec<f64> {
        let intervals = self.count - 1;
        if intervals == 0 {
            return vec![self.start];
        }

        if product_overflows(self.end - self.start, intervals) {
            return self.generate_fallback(intervals);
        }

        let n = intervals as f64;
        if self.start * self.end < 0.0 {
            // Opposite-sign bounds: dividing each bound by the interval
            // count before scaling keeps the intermediate products small.
            (0..self.count)
                .map(|i| {
                    let i = i as f64;
                    self.start + (self.end / n) * i - (self.start / n) * i
                })
                .collect()
        } else {
            let step = (self.end - self.start) / n;
            (0..self.count).map(|i| self.start + i as f64 * step).collect()
        }
    }

    /// Floating-point-only evaluation, used when the scaled product would
    /// overflow the integer range. Agrees with the primary path whenever
    /// both are defined.
    fn generate_fallback(&self, intervals: usize) -> Vec<f64> {
        let step = (self.end - self.start) / intervals as f64;
        (0..self.count).map(|i| self.start + i as f64 * step).collect()
    }
}

/// Explicit overflow check for the scaled product `span * (intervals - 1)`,
/// performed in a widened integer type and compared against the `i64`
/// range, instead of relying on a runtime exception for control flow.
fn product_overflows(span: f64, intervals: usize) -> bool {
    if !span.is_finite() || span.abs() >= i64::MAX as f64 {
        return true;
    }
    let wide = (span as i128) * (intervals as i128 - 1);
    wide > i64::MAX as i128 || wide < i64::MIN as i128
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_and_length() {
        let points = Linspace::new(-5.0, 5.0, 11).unwrap().generate();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], -5.0);
        assert_eq!(points[10], 5.0);
    }

    #[test]
    fn output_is_non_decreasing() {
        let points = Linspace::new(0.25, 7.75, 64).unwrap().generate();
        for w in points.windows(2) {
            assert!(w[0] <= w[1], "{} > {}", w[0], w[1]);
        }
    }

    #[test]
    fn uniform_spacing() {
        let points = Linspace::new(0.0, 1.0, 5).unwrap().generate();
        for w in points.windows(2) {
            assert_relative_eq!(w[1] - w[0], 0.25, max_relative = 1e-12);
        }
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let ls = Linspace::new(3.0, -3.0, 7).unwrap();
        assert_eq!(ls.start(), -3.0);
        assert_eq!(ls.end(), 3.0);
        let points = ls.generate();
        assert_eq!(points[0], -3.0);
        assert_eq!(points[6], 3.0);
    }

    #[test]
    fn zero_width_interval() {
        let points = Linspace::new(5.0, 5.0, 3).unwrap().generate();
        assert_eq!(points, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn single_point() {
        let points = Linspace::new(2.0, 9.0, 1).unwrap().generate();
        assert_eq!(points, vec![2.0]);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = Linspace::new(0.0, 1.0, 0).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidArgument(_)));
    }

    #[test]
    fn generation_is_deterministic() {
        let ls = Linspace::new(-1.5, 2.5, 17).unwrap();
        let a = ls.generate();
        let b = ls.generate();
        // Bitwise identity, not just approximate equality.
        assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn opposite_sign_path_matches_fallback() {
        // start*end < 0 exercises the sign-split formula; the fallback must
        // agree to 1e-9 relative whenever the product does not overflow.
        let ls = Linspace::new(-3.0, 8.0, 23).unwrap();
        let primary = ls.generate();
        let fallback = ls.generate_fallback(22);
        for (p, f) in primary.iter().zip(&fallback) {
            assert_relative_eq!(*p, *f, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn same_sign_path_matches_fallback() {
        let ls = Linspace::new(2.0, 11.0, 10).unwrap();
        let primary = ls.generate();
        let fallback = ls.generate_fallback(9);
        for (p, f) in primary.iter().zip(&fallback) {
            assert_relative_eq!(*p, *f, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn huge_span_takes_fallback_without_error() {
        // Span wide enough to overflow the scaled integer product; output
        // must still honor the endpoint guarantees.
        assert!(product_overflows(1e19, 4));
        let ls = Linspace::new(-5e18, 5e18, 5).unwrap();
        let points = ls.generate();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], -5e18);
        assert_relative_eq!(points[4], 5e18, max_relative = 1e-12);
    }

    #[test]
    fn overflow_predicate() {
        assert!(!product_overflows(10.0, 100));
        assert!(product_overflows(1e19, 3));
        assert!(product_overflows(f64::INFINITY, 2));
        assert!(product_overflows(1e10, 10_000_000_000));
    }
}
