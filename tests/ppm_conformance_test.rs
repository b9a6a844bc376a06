//! End-to-end PPM format conformance tests.
//!
//! These pin the exact serialized output for known canvases: header layout,
//! channel scaling and clamping, the 70-column word wrap, and the trailing
//! newline terminator.

#![allow(clippy::unwrap_used)]

use lucent::prelude::*;

/// 1-based inclusive line range, mirroring how the format is specified
/// ("lines 4-6 hold the pixel data").
fn lines_from_to(ppm: &str, from: usize, to: usize) -> Vec<&str> {
    ppm.lines()
        .skip(from - 1)
        .take(to - from + 1)
        .collect()
}

#[test]
fn fresh_canvas_is_black() {
    let c = Canvas::new(10, 20);
    assert_eq!(c.width(), 10);
    assert_eq!(c.height(), 20);
    assert_eq!(c.pixels().count(), 200);
    assert!(c.pixels().all(|p| p.approx_eq(Tuple::color(0.0, 0.0, 0.0))));
}

#[test]
fn written_pixel_reads_back() {
    let mut c = Canvas::new(10, 20);
    let green = Tuple::color(0.0, 1.0, 0.0);
    c.write_pixel(2, 3, green).unwrap();
    assert_eq!(c.pixel_at(2, 3).unwrap(), green);
}

#[test]
fn header_is_magic_dimensions_max_value() {
    let ppm = PpmEncoder::encode(&Canvas::new(5, 3));
    assert_eq!(lines_from_to(&ppm, 1, 3), vec!["P3", "5 3", "255"]);
}

#[test]
fn data_lines_are_scaled_and_clamped() {
    let mut c = Canvas::new(5, 3);
    c.write_pixel(0, 0, Tuple::color(1.5, 0.0, 0.0)).unwrap();
    c.write_pixel(2, 1, Tuple::color(0.0, 0.5, 0.0)).unwrap();
    c.write_pixel(4, 2, Tuple::color(-0.5, 0.0, 1.0)).unwrap();

    let ppm = PpmEncoder::encode(&c);
    assert_eq!(
        lines_from_to(&ppm, 4, 6),
        vec![
            "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0",
            "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255",
        ]
    );
}

#[test]
fn long_rows_wrap_without_splitting_tokens() {
    let c = Canvas::new(10, 2).map(|_| Tuple::color(1.0, 0.8, 0.6));
    let ppm = PpmEncoder::encode(&c);

    assert_eq!(
        lines_from_to(&ppm, 4, 7),
        vec![
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
            "153 255 204 153 255 204 153 255 204 153 255 204 153",
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
            "153 255 204 153 255 204 153 255 204 153 255 204 153",
        ]
    );

    // every emitted line respects the 70-character limit
    assert!(ppm.lines().all(|line| line.len() <= 70));
}

#[test]
fn output_always_ends_with_newline() {
    for (w, h) in [(5, 3), (10, 2), (1, 1), (7, 7)] {
        let ppm = PpmEncoder::encode(&Canvas::new(w, h));
        assert_eq!(ppm.chars().last(), Some('\n'), "canvas {w}x{h}");
        // trailing blank line terminator: the byte before the final
        // newline is itself a newline
        assert!(ppm.ends_with("\n\n"), "canvas {w}x{h}");
    }
}

#[test]
fn out_of_bounds_pixel_access_is_rejected() {
    let mut c = Canvas::new(5, 3);
    assert!(matches!(
        c.pixel_at(5, 0),
        Err(Error::OutOfBounds { x: 5, y: 0, .. })
    ));
    assert!(matches!(
        c.write_pixel(2, 3, Tuple::WHITE),
        Err(Error::OutOfBounds { x: 2, y: 3, .. })
    ));
}

#[test]
fn ragged_grid_rows_are_rejected() {
    let result = Grid::from_rows(vec![vec![0.0, 0.0], vec![0.0]]);
    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 1
        })
    ));
}
