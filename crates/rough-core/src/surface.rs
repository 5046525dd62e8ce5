//! The generated height field.

use serde::{Deserialize, Serialize};

/// A square 2D height field storing f64 heights, row-major.
///
/// The generator exclusively owns and returns this array; no internal
/// frequency-domain buffer aliases it after the call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Row-major height values.
    pub data: Vec<f64>,
    /// Points per side; `data.len() == n * n`.
    pub n: usize,
}

impl Surface {
    /// Wrap a row-major buffer of length `n * n`.
    pub(crate) fn from_vec(data: Vec<f64>, n: usize) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { data, n }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.n + col] = val;
    }

    /// Sample mean over all heights.
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Sample standard deviation over all heights (n−1 denominator).
    /// Returns 0 for a field with fewer than two samples.
    pub fn std_dev(&self) -> f64 {
        let len = self.data.len();
        if len < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let ss = self.data.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
        (ss / (len - 1) as f64).sqrt()
    }

    pub fn min_height(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_height(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterate over rows as contiguous slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accessors_are_row_major() {
        let mut s = Surface::from_vec(vec![0.0; 9], 3);
        s.set(1, 2, 7.5);
        assert_eq!(s.get(1, 2), 7.5);
        assert_eq!(s.data[5], 7.5);
    }

    #[test]
    fn statistics_on_known_values() {
        let s = Surface::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2);
        assert_relative_eq!(s.mean(), 2.5);
        // Sample variance of 1..4 is 5/3.
        assert_relative_eq!(s.std_dev(), (5.0f64 / 3.0).sqrt(), max_relative = 1e-12);
        assert_eq!(s.min_height(), 1.0);
        assert_eq!(s.max_height(), 4.0);
    }

    #[test]
    fn rows_yields_n_slices_of_n() {
        let s = Surface::from_vec((0..16).map(f64::from).collect(), 4);
        let rows: Vec<&[f64]> = s.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2], &[8.0, 9.0, 10.0, 11.0]);
    }
}
