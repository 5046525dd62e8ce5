//! Surface generation pipeline: the linear (spectral) filtering method.
//!
//! Pipeline:
//!   1. Coordinate axis over `[-side_length/2, side_length/2]` via
//!      [`Linspace`]; outer-product mesh.
//!   2. N×N independent standard-normal draws from the injected source.
//!   3. Forward 2D FFT of the noise field.
//!   4. Gaussian correlation kernel sampled on the mesh and transformed.
//!   5. Elementwise complex multiply — circular convolution of white noise
//!      with the autocorrelation kernel, which imposes the target
//!      correlation lengths without iterative relaxation.
//!   6. Inverse 2D FFT; the real part is the unscaled height field.
//!   7. Rescale to exact zero mean and exact target rms height. Discrete
//!      sampling of the kernel does not reproduce the continuous variance,
//!      so this step is mandatory whatever scaling the filter carries.

use num_complex::Complex64;

use crate::error::SurfaceError;
use crate::fft::{fft2, ifft2};
use crate::filter::CorrelationFilter;
use crate::linspace::Linspace;
use crate::noise::GaussianNoise;
use crate::params::SurfaceParams;
use crate::surface::Surface;

/// Generate one Gaussian random rough surface.
///
/// Pure apart from draws on `noise`; a freshly seeded source reproduces the
/// returned surface bit for bit. Runtime is `O(n² log n)` in
/// `points_per_side` with no external waits.
pub fn generate<N: GaussianNoise>(
    params: &SurfaceParams,
    noise: &mut N,
) -> Result<Surface, SurfaceError> {
    params.validate()?;
    let n = params.points_per_side;
    let half = params.side_length / 2.0;

    let axis = Linspace::new(-half, half, n)?.generate();

    let mut field: Vec<Complex64> = (0..n * n)
        .map(|_| Complex64::new(noise.next_gaussian(), 0.0))
        .collect();
    fft2(&mut field, n)?;

    let filter = CorrelationFilter::from_params(params);
    let mut kernel = filter.sample_mesh(&axis);
    fft2(&mut kernel, n)?;

    for (f, k) in field.iter_mut().zip(&kernel) {
        *f *= *k;
    }
    ifft2(&mut field, n)?;

    let heights: Vec<f64> = field.iter().map(|c| c.re).collect();
    let heights = rescale(heights, params.rms_height)?;
    Ok(Surface::from_vec(heights, n))
}

/// Shift the field to exact zero mean and scale its sample standard
/// deviation (n−1 denominator) to exactly `rms_height`.
fn rescale(mut heights: Vec<f64>, rms_height: f64) -> Result<Vec<f64>, SurfaceError> {
    let len = heights.len() as f64;
    let mean = heights.iter().sum::<f64>() / len;
    for h in heights.iter_mut() {
        *h -= mean;
    }

    let ss = heights.iter().map(|h| h * h).sum::<f64>();
    let std_dev = (ss / (len - 1.0)).sqrt();
    if !(std_dev > 0.0) || !std_dev.is_finite() {
        // Dividing through would propagate NaN into every height.
        return Err(SurfaceError::numerical(
            "rescale",
            format!("sample standard deviation is {std_dev} before rescaling"),
        ));
    }

    let scale = rms_height / std_dev;
    for h in heights.iter_mut() {
        *h *= scale;
    }
    Ok(heights)
}
