//! Thick antialiased strokes composed from an aliased core and smoothed edges.
//!
//! Running coverage antialiasing across a whole thick stroke buys nothing in
//! the interior, where every pixel is fully covered anyway. The composer
//! therefore fills the interior with an exact aliased stroke and runs Wu's
//! algorithm only along the two silhouette edges.

use crate::color::Rgba;
use crate::framebuffer::PixelSink;
use crate::geometry::Segment;
use crate::render::{line, wu};

/// Rasterize an antialiased stroke of the segment's thickness into a sink.
///
/// - thickness 1: a single Wu line, byte-identical to calling
///   [`wu::draw_line_aa`] directly.
/// - thickness 2: two Wu edge lines offset one pixel either side of the
///   ideal line, with no aliased core.
/// - thickness 3 and up: an aliased core of width `thickness - 2` plus two
///   Wu edge lines pushed clear of the core.
///
/// The edge offset axis follows the slope: steeper than unity offsets along
/// x, otherwise along y, keeping the edges roughly perpendicular to the
/// stroke. Vertical segments inherit the Wu precondition (see
/// [`wu::draw_line_aa`]); the axis choice flips discontinuously at slope
/// exactly 1. Both are standing boundaries of this composition, not knobs to
/// tune.
pub fn draw_stroke<S: PixelSink + ?Sized>(sink: &mut S, segment: &Segment, color: Rgba) {
    if segment.thickness == 1 {
        wu::draw_line_aa(sink, segment.start, segment.end, color);
        return;
    }

    // Steeper than unity (or vertical): edges shift along x; otherwise y.
    let along_x = match segment.slope() {
        None => true,
        Some(slope) => slope.abs() > 1.0,
    };

    let draw_edge = |sink: &mut S, offset: i32| {
        let (dx, dy) = if along_x { (offset, 0) } else { (0, offset) };
        wu::draw_line_aa(
            sink,
            segment.start.translate(dx, dy),
            segment.end.translate(dx, dy),
            color,
        );
    };

    if segment.thickness == 2 {
        draw_edge(sink, 1);
        draw_edge(sink, -1);
        return;
    }

    let core_width = segment.thickness - 2;
    let core = Segment {
        start: segment.start,
        end: segment.end,
        thickness: core_width,
    };
    line::draw_line(sink, &core, color);

    // Edges sit at ceil(core/2), nudged one further out for odd cores so
    // they stay clear of pixels the core already painted.
    let mut offset = (core_width + 1) / 2;
    if core_width % 2 == 1 {
        offset += 1;
    }
    draw_edge(sink, offset as i32);
    draw_edge(sink, -(offset as i32));
}
