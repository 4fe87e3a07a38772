//! Rasterization algorithms and their buffer-facing entry points.
//!
//! Four independent rasterizers share the [`PixelSink`] output contract and
//! no runtime state:
//!
//! - **Bresenham thick lines**: integer error-term walk with perpendicular
//!   thickness spans
//! - **Midpoint circles**: thin outlines, filled rings, and disks
//! - **Wu antialiased lines**: coverage-weighted pixel pairs per column
//! - **Stroke composition**: aliased core plus antialiased silhouette edges
//!
//! Every operation is a pure, terminating computation bounded by
//! `max(|dx|, |dy|)` or the radius, with no I/O and no shared state between
//! calls. Calls on distinct targets need no synchronization; serializing
//! calls on one buffer is the caller's job.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod circle;
mod line;
mod stroke;
mod wu;

pub use circle::{draw_circle, draw_filled_circle};
pub use line::{draw_line, line_points};
pub use stroke::draw_stroke;
pub use wu::draw_line_aa;

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::{Canvas, PixelSink};
use crate::geometry::{Circle, Point, PointList, Segment};

/// Rasterize a thick line to raw geometry with no drawing side effect.
///
/// Returns the emitted pixel coordinates in walk order; the caller owns the
/// list.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidThickness`] if `thickness` is zero.
pub fn rasterize_line(start: Point, end: Point, thickness: u32) -> Result<PointList> {
    let segment = Segment::new(start, end, thickness)?;
    Ok(line::line_points(&segment))
}

/// Rasterize a thick line into a caller-owned pixel buffer.
///
/// The buffer is row-major packed `0xAARRGGBB`, `width * height` pixels;
/// out-of-bounds writes are dropped silently.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidThickness`] for a zero thickness, or a
/// dimension error if the buffer does not match `width * height`.
pub fn rasterize_line_to_buffer(
    start: Point,
    end: Point,
    thickness: u32,
    color: Rgba,
    buffer: &mut [u32],
    width: u32,
    height: u32,
) -> Result<()> {
    let segment = Segment::new(start, end, thickness)?;
    let mut canvas = Canvas::new(buffer, width, height)?;
    line::draw_line(&mut canvas, &segment, color);
    Ok(())
}

/// Rasterize a circle ring into a caller-owned pixel buffer.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidThickness`] for a zero thickness, or a
/// dimension error if the buffer does not match `width * height`.
pub fn rasterize_circle_to_buffer(
    center: Point,
    radius: i32,
    thickness: u32,
    color: Rgba,
    buffer: &mut [u32],
    width: u32,
    height: u32,
) -> Result<()> {
    let circle = Circle::new(center, radius, thickness)?;
    let mut canvas = Canvas::new(buffer, width, height)?;
    circle::draw_circle(&mut canvas, &circle, color);
    Ok(())
}

/// Rasterize a filled disk into a caller-owned pixel buffer.
///
/// The border thickness shrinks the fill so it meets a ring of the same
/// thickness drawn at the same radius.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidThickness`] for a zero thickness, or a
/// dimension error if the buffer does not match `width * height`.
pub fn rasterize_filled_circle_to_buffer(
    center: Point,
    radius: i32,
    thickness: u32,
    color: Rgba,
    buffer: &mut [u32],
    width: u32,
    height: u32,
) -> Result<()> {
    let circle = Circle::new(center, radius, thickness)?;
    let mut canvas = Canvas::new(buffer, width, height)?;
    circle::draw_filled_circle(&mut canvas, &circle, color);
    Ok(())
}

/// Rasterize an antialiased stroke into a caller-owned pixel buffer.
///
/// Thickness 1 is a single Wu line; thicker strokes compose an aliased core
/// with two antialiased edges. Vertical segments are a caller contract
/// violation for the antialiased path (see [`draw_line_aa`]).
///
/// # Errors
///
/// Returns [`crate::Error::InvalidThickness`] for a zero thickness, or a
/// dimension error if the buffer does not match `width * height`.
pub fn rasterize_antialiased_line_to_buffer(
    start: Point,
    end: Point,
    thickness: u32,
    color: Rgba,
    buffer: &mut [u32],
    width: u32,
    height: u32,
) -> Result<()> {
    let segment = Segment::new(start, end, thickness)?;
    let mut canvas = Canvas::new(buffer, width, height)?;
    stroke::draw_stroke(&mut canvas, &segment, color);
    Ok(())
}

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive into a sink.
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba);

    /// Draw this primitive with antialiasing if supported.
    fn draw_aa<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        // Default to non-AA drawing
        self.draw(sink, color);
    }
}

impl Drawable for Segment {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        line::draw_line(sink, self, color);
    }

    fn draw_aa<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        stroke::draw_stroke(sink, self, color);
    }
}

impl Drawable for Circle {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        circle::draw_circle(sink, self, color);
    }
}
