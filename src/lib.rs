//! # Rasterkit
//!
//! Integer error-term rasterization of vector primitives: thick Bresenham
//! lines, midpoint-circle rings and disks, and Wu antialiased strokes.
//!
//! The crate turns continuous line and circle equations into exact integer
//! pixel sets. Output goes through a narrow sink contract — emit a pixel
//! `(x, y, color)` — so the same algorithms feed a caller-owned pixel
//! buffer, an owned [`framebuffer::Framebuffer`], a raw callback, or a
//! returned coordinate list. Windowing, compositing, and presentation stay
//! on the caller's side of that line.
//!
//! ## Quick Start
//!
//! ```
//! use rasterkit::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64).unwrap();
//! fb.clear(Rgba::WHITE);
//!
//! let stroke = Segment::new(Point::new(4, 4), Point::new(60, 40), 3).unwrap();
//! stroke.draw_aa(&mut fb, Rgba::BLACK);
//!
//! let ring = Circle::new(Point::new(32, 32), 20, 2).unwrap();
//! ring.draw(&mut fb, Rgba::RED);
//! ```
//!
//! Callers that own the drawing surface write into it directly:
//!
//! ```
//! use rasterkit::render::rasterize_line_to_buffer;
//! use rasterkit::{Point, Rgba};
//!
//! let mut surface = vec![0u32; 320 * 240];
//! rasterize_line_to_buffer(
//!     Point::new(10, 10),
//!     Point::new(300, 200),
//!     5,
//!     Rgba::BLUE,
//!     &mut surface,
//!     320,
//!     240,
//! ).unwrap();
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and packed-pixel conversions.
pub mod color;

/// Pixel output targets (sinks, canvases, framebuffers).
pub mod framebuffer;

/// Geometric primitives (points, segments, circles, point lists).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms and buffer entry points.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterkit operations.
pub mod error;

pub use color::Rgba;
pub use error::{Error, Result};
pub use geometry::{Circle, Point, PointList, Segment};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Canvas, Framebuffer, PixelSink};
    pub use crate::geometry::{Circle, Point, PointList, Segment};
    pub use crate::render::{
        draw_circle, draw_filled_circle, draw_line, draw_line_aa, draw_stroke, Drawable,
    };
}
