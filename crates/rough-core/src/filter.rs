//! Gaussian correlation filter.
//!
//! The filter is the autocorrelation kernel sampled on the spatial
//! coordinate mesh, `exp(-(x²/(clx²/2) + y²/(cly²/2)))`; its transform
//! shapes the noise spectrum during generation. Which branch built the
//! filter is decided by the presence of the y-axis correlation length, not
//! by comparing values, and stays observable through [`FilterKind`].

use num_complex::Complex64;

use crate::params::SurfaceParams;

/// Which construction branch produced a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Isotropic,
    Anisotropic,
}

/// Gaussian autocorrelation kernel with per-axis widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationFilter {
    kind: FilterKind,
    cl_x: f64,
    cl_y: f64,
}

impl CorrelationFilter {
    /// Build the filter for the given parameters.
    ///
    /// `Some(cl_y)` selects the anisotropic branch even when `cl_y` equals
    /// `correlation_length_x`; absence selects the isotropic branch, which
    /// reuses the x-axis length for both axes.
    pub fn from_params(params: &SurfaceParams) -> Self {
        match params.correlation_length_y {
            Some(cl_y) => Self {
                kind: FilterKind::Anisotropic,
                cl_x: params.correlation_length_x,
                cl_y,
            },
            None => Self {
                kind: FilterKind::Isotropic,
                cl_x: params.correlation_length_x,
                cl_y: params.correlation_length_x,
            },
        }
    }

    /// The construction branch that was taken.
    #[inline]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Kernel value at spatial offset `(x, y)`. Peaks at 1 on the origin
    /// and decays over the correlation lengths.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let gx = x * x / (self.cl_x * self.cl_x / 2.0);
        let gy = y * y / (self.cl_y * self.cl_y / 2.0);
        (-(gx + gy)).exp()
    }

    /// Sample the kernel over the outer-product mesh of a coordinate axis,
    /// as a row-major complex buffer ready for the forward transform.
    /// `axis[col]` is the x offset and `axis[row]` the y offset.
    pub fn sample_mesh(&self, axis: &[f64]) -> Vec<Complex64> {
        let n = axis.len();
        let mut mesh = Vec::with_capacity(n * n);
        for &y in axis {
            for &x in axis {
                mesh.push(Complex64::new(self.sample(x, y), 0.0));
            }
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn absent_cl_y_takes_isotropic_branch() {
        let f = CorrelationFilter::from_params(&SurfaceParams::isotropic(8, 10.0, 2.0, 3.0));
        assert_eq!(f.kind(), FilterKind::Isotropic);
    }

    #[test]
    fn equal_valued_cl_y_still_takes_anisotropic_branch() {
        // Dispatch is flag-based: an explicit y length equal to the x
        // length must not collapse to the isotropic branch.
        let f =
            CorrelationFilter::from_params(&SurfaceParams::anisotropic(8, 10.0, 2.0, 3.0, 3.0));
        assert_eq!(f.kind(), FilterKind::Anisotropic);
    }

    #[test]
    fn isotropic_kernel_is_radially_symmetric() {
        let f = CorrelationFilter::from_params(&SurfaceParams::isotropic(8, 10.0, 2.0, 3.0));
        assert_relative_eq!(f.sample(1.0, 2.0), f.sample(2.0, 1.0), max_relative = 1e-12);
        assert_relative_eq!(f.sample(0.0, 0.0), 1.0);
    }

    #[test]
    fn anisotropic_kernel_decays_faster_on_the_shorter_axis() {
        let f =
            CorrelationFilter::from_params(&SurfaceParams::anisotropic(8, 10.0, 2.0, 4.0, 1.0));
        // Same offset along each axis: the y axis has the shorter length,
        // so correlation drops off harder there.
        assert!(f.sample(2.0, 0.0) > f.sample(0.0, 2.0));
    }

    #[test]
    fn mesh_is_row_major_over_the_axis() {
        let f = CorrelationFilter::from_params(&SurfaceParams::isotropic(8, 10.0, 2.0, 3.0));
        let axis = [-1.0, 0.0, 1.0];
        let mesh = f.sample_mesh(&axis);
        assert_eq!(mesh.len(), 9);
        // Centre of the mesh is the origin.
        assert_relative_eq!(mesh[4].re, 1.0);
        assert_relative_eq!(mesh[1].re, f.sample(0.0, -1.0), max_relative = 1e-12);
        assert_relative_eq!(mesh[3].re, f.sample(-1.0, 0.0), max_relative = 1e-12);
    }
}
