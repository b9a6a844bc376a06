//! Plain-text PPM ("P3") output encoder.
//!
//! Serializes a [`Canvas`] to the portable pixmap text format: a `P3` magic
//! line, the dimensions, the maximum color value, then one `R G B` integer
//! triplet per pixel, row by row, word-wrapped at 70 columns. The output is
//! bit-for-bit reproducible for a given canvas.

use crate::canvas::Canvas;
use crate::tuple::Tuple;

/// Maximum color value pixels are scaled to.
const MAX_COLOR_VALUE: u32 = 255;

/// Longest data line the format permits, in characters.
const MAX_LINE_LENGTH: usize = 70;

/// PPM encoder for canvas output.
///
/// Encoding is a pure function of the canvas; it performs no I/O. Writing
/// the returned string to disk is the caller's concern.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Serialize a canvas to a PPM string.
    ///
    /// Channel values are scaled to `[0, 255]` and clamped, so colors
    /// outside `[0, 1]` are legal input. The result always ends with a
    /// blank-line terminator.
    #[must_use]
    pub fn encode(canvas: &Canvas) -> String {
        let mut out = String::from("P3\n");
        out.push_str(&format!("{} {}\n", canvas.width(), canvas.height()));
        out.push_str(&format!("{MAX_COLOR_VALUE}\n"));

        for row in canvas.rows() {
            let tokens: Vec<String> = row.iter().flat_map(|&pixel| pixel_tokens(pixel)).collect();
            for line in wrap_tokens(&tokens, MAX_LINE_LENGTH) {
                out.push_str(&line);
                out.push('\n');
            }
        }

        out.push('\n');
        out
    }
}

/// Scale one color channel to a clamped integer in `[0, MAX_COLOR_VALUE]`.
///
/// Scale first, clamp below 0 and above the maximum, then round to nearest.
fn scale_channel(value: f64) -> u32 {
    let max = f64::from(MAX_COLOR_VALUE);
    (value * max).min(max).max(0.0).round() as u32
}

/// The three scaled `R G B` tokens for one pixel; the `w` channel is
/// ignored.
fn pixel_tokens(pixel: Tuple) -> [String; 3] {
    [
        scale_channel(pixel.r()).to_string(),
        scale_channel(pixel.g()).to_string(),
        scale_channel(pixel.b()).to_string(),
    ]
}

/// Greedily pack tokens into lines of at most `max_len` characters, joined
/// by single spaces.
///
/// Every line starts with the next unplaced token unconditionally, so a
/// token that alone exceeds the limit still gets a line of its own; tokens
/// are never split or dropped.
fn wrap_tokens(tokens: &[String], max_len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let mut line = tokens[i].clone();
        i += 1;
        while i < tokens.len() && line.len() + 1 + tokens[i].len() <= max_len {
            line.push(' ');
            line.push_str(&tokens[i]);
            i += 1;
        }
        lines.push(line);
    }

    lines
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// No emitted line exceeds the 70-character limit, and the output
        /// always carries the blank-line terminator
        #[test]
        fn prop_lines_bounded_and_terminated(
            width in 0usize..24,
            height in 0usize..24,
            r in -2.0_f64..2.0,
            g in -2.0_f64..2.0,
            b in -2.0_f64..2.0,
        ) {
            let canvas = Canvas::new(width, height).map(|_| Tuple::color(r, g, b));
            let ppm = PpmEncoder::encode(&canvas);

            prop_assert!(ppm.lines().all(|line| line.len() <= MAX_LINE_LENGTH));
            prop_assert!(ppm.ends_with('\n'));
        }

        /// Every pixel contributes exactly three tokens, in row-major order
        #[test]
        fn prop_token_count_matches_pixels(
            width in 1usize..16,
            height in 1usize..16,
        ) {
            let canvas = Canvas::new(width, height);
            let ppm = PpmEncoder::encode(&canvas);

            let tokens: usize = ppm
                .lines()
                .skip(3)
                .map(|line| line.split_whitespace().count())
                .sum();
            prop_assert_eq!(tokens, canvas.pixel_count() * 3);
        }
    }
}
