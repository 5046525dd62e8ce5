//! Synthesis of Gaussian random rough surfaces.
//!
//! Builds a square height field whose statistics — rms height, lateral
//! correlation length, isotropy — match caller-supplied targets, using the
//! linear (spectral) filtering method: white Gaussian noise is transformed
//! to the frequency domain, multiplied by the transform of a Gaussian
//! autocorrelation kernel, transformed back, and rescaled to the exact
//! target rms height.
//!
//! The crate is a library core only. Parameter ingestion (CLI flags, CSV
//! rows) and output consumption (textual dumps, 3D plots) belong to
//! external collaborators: they hand us a [`SurfaceParams`] plus a
//! [`GaussianNoise`] source and receive a [`Surface`].

pub mod error;
pub mod fft;
pub mod filter;
pub mod generator;
pub mod linspace;
pub mod noise;
pub mod params;
pub mod surface;

pub use error::SurfaceError;
pub use filter::{CorrelationFilter, FilterKind};
pub use generator::generate;
pub use linspace::Linspace;
pub use noise::{GaussianNoise, SeededGaussian};
pub use params::SurfaceParams;
pub use surface::Surface;
