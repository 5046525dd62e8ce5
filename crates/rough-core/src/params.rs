//! Surface generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;

/// Target statistics for one generated surface.
///
/// Isotropy is decided by the *presence* of `correlation_length_y`, never
/// by comparing its value against `correlation_length_x`: an explicit
/// `Some(v)` selects the anisotropic branch even when `v` equals the x-axis
/// length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceParams {
    /// Number of sample points along each side of the square domain.
    /// Powers of two give the fastest transforms but are not required.
    pub points_per_side: usize,
    /// Physical length of the square domain edge.
    pub side_length: f64,
    /// Target standard deviation of the surface heights.
    pub rms_height: f64,
    /// Lateral correlation length along the x axis.
    pub correlation_length_x: f64,
    /// Lateral correlation length along the y axis. Absent for an
    /// isotropic surface.
    pub correlation_length_y: Option<f64>,
}

impl SurfaceParams {
    /// Parameters for an isotropic surface (one correlation length for
    /// both axes).
    pub fn isotropic(
        points_per_side: usize,
        side_length: f64,
        rms_height: f64,
        correlation_length: f64,
    ) -> Self {
        Self {
            points_per_side,
            side_length,
            rms_height,
            correlation_length_x: correlation_length,
            correlation_length_y: None,
        }
    }

    /// Parameters for an anisotropic surface with independent correlation
    /// lengths per axis.
    pub fn anisotropic(
        points_per_side: usize,
        side_length: f64,
        rms_height: f64,
        correlation_length_x: f64,
        correlation_length_y: f64,
    ) -> Self {
        Self {
            points_per_side,
            side_length,
            rms_height,
            correlation_length_x,
            correlation_length_y: Some(correlation_length_y),
        }
    }

    /// Whether the anisotropic branch will be taken.
    #[inline]
    pub fn is_anisotropic(&self) -> bool {
        self.correlation_length_y.is_some()
    }

    /// Check every generation precondition.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.points_per_side < 2 {
            return Err(SurfaceError::invalid(format!(
                "points_per_side must be at least 2, got {}",
                self.points_per_side
            )));
        }
        if !self.side_length.is_finite() || self.side_length <= 0.0 {
            return Err(SurfaceError::invalid(format!(
                "side_length must be positive and finite, got {}",
                self.side_length
            )));
        }
        if !self.rms_height.is_finite() || self.rms_height < 0.0 {
            return Err(SurfaceError::invalid(format!(
                "rms_height must be non-negative and finite, got {}",
                self.rms_height
            )));
        }
        if !self.correlation_length_x.is_finite() || self.correlation_length_x <= 0.0 {
            return Err(SurfaceError::invalid(format!(
                "correlation_length_x must be positive and finite, got {}",
                self.correlation_length_x
            )));
        }
        if let Some(cl_y) = self.correlation_length_y {
            if !cl_y.is_finite() || cl_y <= 0.0 {
                return Err(SurfaceError::invalid(format!(
                    "correlation_length_y must be positive and finite, got {cl_y}"
                )));
            }
        }
        Ok(())
    }
}
