//! # Lucent
//!
//! Geometric tuple algebra and raster output for ray-tracer-style renderers.
//!
//! Lucent provides the bottom layer of a ray tracer: a 4-component tuple
//! type shared by points, direction vectors, and colors; a fixed-size pixel
//! canvas built on a generic 2D grid; and a plain-text PPM serializer with
//! reproducible, word-wrapped output.
//!
//! ## Quick Start
//!
//! ```rust
//! use lucent::prelude::*;
//!
//! // Trace something trivial: plot one red pixel
//! let mut canvas = Canvas::new(5, 3);
//! canvas.write_pixel(1, 2, Tuple::color(1.0, 0.0, 0.0))?;
//!
//! // Serialize to the PPM text format
//! let ppm = PpmEncoder::encode(&canvas);
//! assert!(ppm.starts_with("P3\n5 3\n255\n"));
//! # Ok::<(), lucent::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Pure and synchronous**: no I/O, no shared state between calls; the
//!   encoder is a pure function of the canvas.
//! - **Float semantics by convention**: normalizing a zero vector or
//!   dividing by zero propagates IEEE NaN/infinities rather than erroring;
//!   out-of-gamut color channels are clamped at export time, not rejected.
//! - **One equivalence policy**: a single crate-wide tolerance
//!   ([`tuple::EPSILON`]) and rounding precision keep floating-point
//!   comparisons reproducible.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in pixel/geometry math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Tuple algebra for points, vectors, and colors.
pub mod tuple;

/// Generic fixed-size 2D grid.
pub mod grid;

/// Pixel canvas for raster rendering.
pub mod canvas;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Output encoders (plain-text PPM).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for lucent operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use lucent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::grid::Grid;
    pub use crate::output::PpmEncoder;
    pub use crate::tuple::{approx_eq, round_equiv, Tuple, EPSILON};
}
