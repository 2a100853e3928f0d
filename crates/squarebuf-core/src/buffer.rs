//! Square buffer construction around point features.
//!
//! Generates a fixed-size, axis-aligned square polygon centered on a point.
//! The square's side length is twice the buffer distance; the ring is closed
//! by repeating the first corner.

use geo_types::{Coord, LineString, Point, Polygon};

/// Default buffer distance, in the linear unit of the input coordinate
/// reference system.
pub const DEFAULT_DISTANCE: f64 = 100.0;

/// Compute the closed 5-coordinate ring of a square centered on `point`.
///
/// Corners are ordered counter-clockwise starting from quadrant I
/// (+x, +y), and the ring is closed by repeating the first corner.
///
/// The distance is not validated: `0.0` yields a degenerate ring collapsed
/// onto the center, and a negative distance yields an inverted (clockwise)
/// ring. Both are accepted boundary cases.
///
/// # Examples
///
/// ```
/// use geo_types::{Coord, Point};
/// use squarebuf_core::buffer::square_ring;
///
/// let ring = square_ring(Point::new(1000.0, 2000.0), 100.0);
/// assert_eq!(ring[0], Coord { x: 1100.0, y: 2100.0 });
/// assert_eq!(ring[4], ring[0]);
/// ```
#[must_use]
pub fn square_ring(point: Point<f64>, distance: f64) -> [Coord<f64>; 5] {
    let x_pos = point.x() + distance;
    let y_pos = point.y() + distance;
    let x_neg = point.x() - distance;
    let y_neg = point.y() - distance;

    [
        Coord { x: x_pos, y: y_pos },
        Coord { x: x_neg, y: y_pos },
        Coord { x: x_neg, y: y_neg },
        Coord { x: x_pos, y: y_neg },
        Coord { x: x_pos, y: y_pos },
    ]
}

/// Create the square buffer polygon around `point`.
///
/// The polygon consists of a single exterior ring built by [`square_ring`];
/// there are no interior rings.
#[must_use]
pub fn square_buffer(point: Point<f64>, distance: f64) -> Polygon<f64> {
    Polygon::new(LineString::from(square_ring(point, distance).to_vec()), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, BoundingRect, Centroid};

    #[test]
    fn test_ring_matches_reference_corners() {
        let ring = square_ring(Point::new(1000.0, 2000.0), 100.0);

        assert_eq!(ring[0], Coord { x: 1100.0, y: 2100.0 });
        assert_eq!(ring[1], Coord { x: 900.0, y: 2100.0 });
        assert_eq!(ring[2], Coord { x: 900.0, y: 1900.0 });
        assert_eq!(ring[3], Coord { x: 1100.0, y: 1900.0 });
        assert_eq!(ring[4], ring[0], "ring must be closed");
    }

    #[test]
    fn test_buffer_centroid_is_source_point() {
        let center = Point::new(1_600_000.0, 10_000_000.0);
        let square = square_buffer(center, 250.0);

        let centroid = square.centroid().expect("square has a centroid");
        assert!((centroid.x() - center.x()).abs() < 1e-6);
        assert!((centroid.y() - center.y()).abs() < 1e-6);
    }

    #[test]
    fn test_buffer_extent_is_twice_the_distance() {
        let square = square_buffer(Point::new(-50.0, 30.0), 10.0);

        let rect = square.bounding_rect().expect("square has an extent");
        assert!((rect.width() - 20.0).abs() < 1e-12);
        assert!((rect.height() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_buffer_area() {
        let square = square_buffer(Point::new(0.0, 0.0), 100.0);
        // side = 2d, area = 4d^2
        assert!((square.unsigned_area() - 40_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_counter_clockwise_winding() {
        let square = square_buffer(Point::new(5.0, 5.0), 2.0);
        // quadrant I -> II -> III -> IV order is counter-clockwise,
        // so the signed area is positive
        assert!(square.signed_area() > 0.0);
    }

    #[test]
    fn test_zero_distance_degenerates() {
        let square = square_buffer(Point::new(7.0, -3.0), 0.0);

        assert_eq!(square.unsigned_area(), 0.0);
        for coord in square.exterior().coords() {
            assert_eq!(*coord, Coord { x: 7.0, y: -3.0 });
        }
    }

    #[test]
    fn test_negative_distance_inverts_the_ring() {
        let square = square_buffer(Point::new(0.0, 0.0), -10.0);

        // corners swap quadrants, flipping the winding to clockwise
        assert!(square.signed_area() < 0.0);
        assert!((square.unsigned_area() - 400.0).abs() < 1e-9);
    }
}
