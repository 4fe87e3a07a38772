//! Thick line rasterization using Bresenham's algorithm.
//!
//! The walk steps an integer error term along the dominant axis and expands
//! the stroke perpendicular to travel by emitting a fixed-width pixel span at
//! every principal step. No floating point is involved.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::color::Rgba;
use crate::framebuffer::PixelSink;
use crate::geometry::{PointList, Segment};

/// Rasterize a thick segment into a sink.
///
/// Emits every pixel of the stroke: `max(|dx|, |dy|) + 1` spans of
/// `2*(thickness/2) + 1` pixels each, the span running along the axis
/// perpendicular to the dominant travel direction. The emitted pixel set is
/// identical under exchange of the endpoints, and a degenerate segment
/// (coincident endpoints) still emits its span once.
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, segment: &Segment, color: Rgba) {
    walk_line(segment, |x, y| sink.emit(x, y, color));
}

/// Rasterize a thick segment into an owned [`PointList`].
///
/// The list is pre-sized with the original allocator's estimate
/// (`(|dx| + 1) * thickness`) and grows by doubling if the stroke outruns it.
pub fn line_points(segment: &Segment) -> PointList {
    let dx = (segment.end.x - segment.start.x).unsigned_abs() as usize;
    let mut list = PointList::with_capacity((dx + 1) * segment.thickness as usize);
    walk_line(segment, |x, y| list.push(x, y));
    list
}

/// Core Bresenham walk shared by both output modes.
fn walk_line<F: FnMut(i32, i32)>(segment: &Segment, mut emit: F) {
    // Canonical traversal direction: left-to-right, top-to-bottom for
    // verticals. Keeps the pixel set independent of endpoint order.
    let (start, end) = if (segment.end.x, segment.end.y) < (segment.start.x, segment.start.y) {
        (segment.end, segment.start)
    } else {
        (segment.start, segment.end)
    };

    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let step_x = if end.x > start.x { 1 } else { -1 };
    let step_y = if end.y > start.y { 1 } else { -1 };

    // Steep lines step y as the primary axis and take the thickness span
    // along x; shallow lines the reverse.
    let steep = dy >= dx;
    let mut error = if steep { dy - dx } else { dx - dy };

    let radius = (segment.thickness / 2) as i32;
    let mut x = start.x;
    let mut y = start.y;

    loop {
        for i in -radius..=radius {
            if steep {
                emit(x + i, y);
            } else {
                emit(x, y + i);
            }
        }

        if x == end.x && y == end.y {
            break;
        }

        let two_error = 2 * error;
        if steep {
            if two_error > -dx {
                if y == end.y {
                    break;
                }
                error -= dx;
                y += step_y;
            }
            if two_error < dy {
                if x == end.x {
                    break;
                }
                error += dy;
                x += step_x;
            }
        } else {
            if two_error > -dy {
                if x == end.x {
                    break;
                }
                error -= dy;
                x += step_x;
            }
            if two_error < dx {
                if y == end.y {
                    break;
                }
                error += dx;
                y += step_y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn segment(x0: i32, y0: i32, x1: i32, y1: i32, thickness: u32) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1), thickness).unwrap()
    }

    /// Collect a segment's pixel set as sorted, deduplicated points.
    fn pixel_set(segment: &Segment) -> Vec<Point> {
        let list = line_points(segment);
        let mut points: Vec<Point> = list.iter().collect();
        points.sort_by_key(|p| (p.x, p.y));
        points.dedup();
        points
    }

    #[test]
    fn test_thin_horizontal_emits_in_order() {
        let list = line_points(&segment(0, 0, 4, 0, 1));
        let points: Vec<Point> = list.iter().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
    }

    #[test]
    fn test_thick_horizontal_is_rectangle() {
        // (0,0)-(5,0) at thickness 3: 6 columns, rows -1..=1
        let points = pixel_set(&segment(0, 0, 5, 0, 3));
        assert_eq!(points.len(), 18);
        for x in 0..=5 {
            for y in -1..=1 {
                assert!(points.contains(&Point::new(x, y)), "missing ({x},{y})");
            }
        }
    }

    #[test]
    fn test_thick_vertical_is_rectangle() {
        let points = pixel_set(&segment(2, 0, 2, 5, 3));
        assert_eq!(points.len(), 18);
        for y in 0..=5 {
            for x in 1..=3 {
                assert!(points.contains(&Point::new(x, y)), "missing ({x},{y})");
            }
        }
    }

    #[test]
    fn test_diagonal_45_degrees() {
        let points = pixel_set(&segment(0, 0, 3, 3, 1));
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_degenerate_emits_span_once() {
        let list = line_points(&segment(7, 7, 7, 7, 5));
        let points: Vec<Point> = list.iter().collect();
        // One span of 2*(5/2)+1 = 5 pixels, perpendicular to the (steep) axis
        assert_eq!(points.len(), 5);
        for i in -2..=2 {
            assert!(points.contains(&Point::new(7 + i, 7)));
        }
    }

    #[test]
    fn test_span_width_even_thickness() {
        // Even thickness t emits 2*(t/2)+1 pixels per step, same as t+1
        let list = line_points(&segment(0, 0, 0, 0, 4));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_endpoint_swap_same_pixels() {
        let forward = pixel_set(&segment(1, 2, 10, 7, 3));
        let backward = pixel_set(&segment(10, 7, 1, 2, 3));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_endpoint_swap_steep() {
        let forward = pixel_set(&segment(0, 0, 2, 9, 1));
        let backward = pixel_set(&segment(2, 9, 0, 0, 1));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_principal_step_count() {
        // max(|dx|,|dy|)+1 spans of one pixel each for a thin line
        let list = line_points(&segment(0, 0, 5, 2, 1));
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_steep_line_covers_every_row() {
        let points = pixel_set(&segment(0, 0, 3, 9, 1));
        for y in 0..=9 {
            assert!(
                points.iter().any(|p| p.y == y),
                "no pixel in row {y}"
            );
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let points = pixel_set(&segment(-5, -5, -1, -1, 1));
        assert_eq!(points.len(), 5);
        assert!(points.contains(&Point::new(-3, -3)));
    }

    #[test]
    fn test_draw_line_emits_color() {
        let mut seen = Vec::new();
        let mut sink = |x: i32, y: i32, color: Rgba| seen.push((x, y, color));
        draw_line(&mut sink, &segment(0, 0, 2, 0, 1), Rgba::RED);
        assert_eq!(
            seen,
            vec![
                (0, 0, Rgba::RED),
                (1, 0, Rgba::RED),
                (2, 0, Rgba::RED),
            ]
        );
    }
}
