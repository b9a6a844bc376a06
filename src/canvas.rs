//! Pixel canvas for raster rendering.
//!
//! A [`Canvas`] is a [`Grid`] of color [`Tuple`]s with a 0-based `(x, y)`
//! pixel interface (`x` is the column, `y` is the row; the top-left pixel is
//! `(0, 0)`). The grid underneath is addressed 1-based, and the canvas
//! performs that conversion on every access.
//!
//! # Mutation contract
//!
//! `write_pixel` mutates the owned grid in place behind `&mut self`; it does
//! not copy the canvas. The exclusive borrow gives the single-writer
//! guarantee, and because [`Tuple`] is `Copy`, every read and write moves an
//! independent value: a color a caller holds can never observe later canvas
//! mutation.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::tuple::Tuple;

/// A fixed-size 2D grid of color tuples representing a raster image.
///
/// Every pixel starts out black.
///
/// # Example
///
/// ```
/// use lucent::canvas::Canvas;
/// use lucent::tuple::Tuple;
///
/// let mut c = Canvas::new(10, 20);
/// c.write_pixel(2, 3, Tuple::color(0.0, 1.0, 0.0))?;
/// assert_eq!(c.pixel_at(2, 3)?, Tuple::color(0.0, 1.0, 0.0));
/// # Ok::<(), lucent::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    grid: Grid<Tuple>,
}

impl Canvas {
    /// Create a canvas of `width` x `height` black pixels.
    ///
    /// Construction always succeeds; zero dimensions are legal and yield an
    /// empty pixel sequence.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(height, width, || Tuple::BLACK),
        }
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Get a copy of the color at pixel `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the canvas;
    /// there is no clamping or wraparound.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Tuple> {
        if x >= self.width() || y >= self.height() {
            return Err(self.out_of_bounds(x, y));
        }
        self.grid
            .elem(y + 1, x + 1)
            .copied()
            .ok_or(self.out_of_bounds(x, y))
    }

    /// Write `color` to pixel `(x, y)` in place.
    ///
    /// Only the addressed cell changes; every other pixel keeps its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the canvas.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Tuple) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(self.out_of_bounds(x, y));
        }
        if let Some(cell) = self.grid.elem_mut(y + 1, x + 1) {
            *cell = color;
        }
        Ok(())
    }

    /// Iterate over copies of every pixel in row-major order (top row
    /// first, each row left to right).
    ///
    /// The order is normative: tests and reproducers comparing whole
    /// canvases rely on it.
    pub fn pixels(&self) -> impl Iterator<Item = Tuple> + '_ {
        self.grid.iter().copied()
    }

    /// Iterate over pixel rows as slices, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Tuple]> {
        (1..=self.grid.height()).filter_map(move |row| self.grid.row(row))
    }

    /// Flood the canvas with one color.
    pub fn fill(&mut self, color: Tuple) {
        self.grid.fill(color);
    }

    /// Build a new canvas by applying `f` to every pixel.
    #[must_use]
    pub fn map(&self, f: impl Fn(Tuple) -> Tuple) -> Self {
        Self {
            grid: self.grid.map(|&pixel| f(pixel)),
        }
    }

    const fn out_of_bounds(&self, x: usize, y: usize) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
