//! Antialiased line rasterization using Wu's coverage-splitting technique.
//!
//! Each interior column writes two vertically adjacent pixels whose alpha
//! channels split the source alpha in proportion to the ideal line's
//! fractional distance from the pixel centers. RGB channels pass through
//! unchanged; the emitted color is stored, not blended, so compositing
//! against the background belongs to whoever owns the buffer.
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::color::Rgba;
use crate::framebuffer::PixelSink;
use crate::geometry::Point;

/// Rasterize a one-pixel antialiased line into a sink.
///
/// The two endpoint pixels receive half the source alpha; every interior
/// column receives a coverage-weighted pair at `floor(y)` and `floor(y) + 1`
/// whose alphas sum to the source alpha (modulo rounding).
///
/// The caller must guarantee `start.x != end.x`: vertical segments have no
/// defined slope here and degenerate to the two endpoint pixels. Callers
/// wanting vertical antialiased strokes must special-case them before this
/// point.
pub fn draw_line_aa<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point, color: Rgba) {
    // Travel left-to-right
    let (start, end) = if end.x < start.x {
        (end, start)
    } else {
        (start, end)
    };

    let slope = f64::from(end.y - start.y) / f64::from(end.x - start.x);

    let half = weighted_alpha(color.a, 0.5);
    sink.emit(start.x, start.y, color.with_alpha(half));

    let mut actual_y = f64::from(start.y);
    for x in (start.x + 1)..end.x {
        actual_y += slope;
        let y = actual_y.floor() as i32;

        // The pixel nearer the ideal line takes the larger alpha share.
        let top_distance = actual_y - f64::from(y);
        let bottom_distance = 1.0 - top_distance;
        sink.emit(x, y, color.with_alpha(weighted_alpha(color.a, bottom_distance)));
        sink.emit(
            x,
            y + 1,
            color.with_alpha(weighted_alpha(color.a, top_distance)),
        );
    }

    sink.emit(end.x, end.y, color.with_alpha(half));
}

/// Scale an alpha channel by a coverage fraction, rounding half up.
fn weighted_alpha(alpha: u8, coverage: f64) -> u8 {
    (f64::from(alpha) * coverage + 0.5) as u8
}
