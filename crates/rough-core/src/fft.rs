//! Square 2D discrete Fourier transforms over `rustfft`.
//!
//! A 2D transform is a 1D pass over the rows, an in-place transpose, a
//! second row pass, and a transpose back. The forward transform is
//! unnormalized; the inverse is scaled by `1/N²` so a forward/inverse round
//! trip is the identity.

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::SurfaceError;

/// Forward 2D FFT of an `n × n` row-major buffer, in place.
pub fn fft2(data: &mut [Complex64], n: usize) -> Result<(), SurfaceError> {
    transform(data, n, Direction::Forward)
}

/// Inverse 2D FFT of an `n × n` row-major buffer, in place, scaled by `1/n²`.
pub fn ifft2(data: &mut [Complex64], n: usize) -> Result<(), SurfaceError> {
    transform(data, n, Direction::Inverse)
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Forward,
    Inverse,
}

fn transform(data: &mut [Complex64], n: usize, dir: Direction) -> Result<(), SurfaceError> {
    if n == 0 {
        return Err(SurfaceError::numerical("fft", "transform size is zero"));
    }
    if data.len() != n * n {
        return Err(SurfaceError::numerical(
            "fft",
            format!("buffer holds {} values, expected {n}×{n}", data.len()),
        ));
    }

    let mut planner = FftPlanner::new();
    let fft = match dir {
        Direction::Forward => planner.plan_fft_forward(n),
        Direction::Inverse => planner.plan_fft_inverse(n),
    };

    for row in data.chunks_exact_mut(n) {
        fft.process(row);
    }
    transpose(data, n);
    for row in data.chunks_exact_mut(n) {
        fft.process(row);
    }
    transpose(data, n);

    if dir == Direction::Inverse {
        let scale = 1.0 / (n * n) as f64;
        for v in data.iter_mut() {
            *v *= scale;
        }
    }
    Ok(())
}

/// In-place transpose of a square row-major buffer.
fn transpose(data: &mut [Complex64], n: usize) {
    for r in 0..n {
        for c in r + 1..n {
            data.swap(r * n + c, c * n + r);
        }
    }
}
