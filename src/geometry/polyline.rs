//! Open polyline geometry with arc-length bookkeeping
//!
//! Snakes are rendered as a moving sub-segment of a longer path, so besides
//! point storage the polyline supports arc-length parameterized slicing:
//! "give me the stretch between 30% and 45% of the total length".

use kurbo::Point;

/// An open polyline: straight segments between consecutive points, no
/// smoothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total arc length: the sum of Euclidean distances between consecutive
    /// points.
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Cumulative arc length at every point; the first entry is 0.
    pub fn cumulative_lengths(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                total += self.points[i - 1].distance(*point);
            }
            lengths.push(total);
        }
        lengths
    }

    /// Sub-polyline between two arc-length fractions.
    ///
    /// Fractions are clamped to [0, 1]; `start >= end` yields an empty
    /// polyline. Endpoints that fall inside a segment are interpolated, so
    /// the slice's arc length is exactly `(end - start) * arc_length()` up
    /// to floating point error.
    pub fn slice(&self, start_frac: f64, end_frac: f64) -> Polyline {
        let start_frac = start_frac.clamp(0.0, 1.0);
        let end_frac = end_frac.clamp(0.0, 1.0);
        if self.points.len() < 2 || end_frac <= start_frac {
            return Polyline::default();
        }

        let lengths = self.cumulative_lengths();
        let total = *lengths.last().unwrap_or(&0.0);
        if total <= 0.0 {
            // All points coincide; the whole path is the slice.
            return self.clone();
        }

        let start_len = start_frac * total;
        let end_len = end_frac * total;

        let mut out = Vec::new();
        out.push(self.point_at(start_len, &lengths));
        for (point, length) in self.points.iter().zip(lengths.iter()) {
            if *length > start_len && *length < end_len {
                out.push(*point);
            }
        }
        out.push(self.point_at(end_len, &lengths));
        Polyline::new(out)
    }

    /// Point at a given arc length, interpolated within its segment.
    fn point_at(&self, target: f64, lengths: &[f64]) -> Point {
        debug_assert_eq!(lengths.len(), self.points.len());
        let index = lengths.partition_point(|length| *length < target);
        if index == 0 {
            return self.points[0];
        }
        if index >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let segment = lengths[index] - lengths[index - 1];
        if segment <= 0.0 {
            return self.points[index];
        }
        let t = (target - lengths[index - 1]) / segment;
        self.points[index - 1].lerp(self.points[index], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_angle() -> Polyline {
        // Two 10-unit legs meeting at a right angle
        Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ])
    }

    #[test]
    fn arc_length_sums_segments() {
        assert_eq!(right_angle().arc_length(), 20.0);
        assert_eq!(Polyline::default().arc_length(), 0.0);
        assert_eq!(Polyline::new(vec![Point::new(3.0, 4.0)]).arc_length(), 0.0);
    }

    #[test]
    fn cumulative_lengths_start_at_zero() {
        assert_eq!(right_angle().cumulative_lengths(), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn full_slice_preserves_endpoints() {
        let path = right_angle();
        let sliced = path.slice(0.0, 1.0);
        assert_eq!(sliced.points().first(), path.points().first());
        assert_eq!(sliced.points().last(), path.points().last());
        assert!((sliced.arc_length() - path.arc_length()).abs() < 1e-9);
    }

    #[test]
    fn interior_slice_interpolates_endpoints() {
        // 25%..75% of the right angle covers 5 units on each leg
        let sliced = right_angle().slice(0.25, 0.75);
        assert_eq!(sliced.points().first(), Some(&Point::new(5.0, 0.0)));
        assert_eq!(sliced.points().last(), Some(&Point::new(10.0, 5.0)));
        assert!((sliced.arc_length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn slice_length_matches_fraction_span() {
        let path = right_angle();
        let sliced = path.slice(0.1, 0.35);
        assert!((sliced.arc_length() - 0.25 * path.arc_length()).abs() < 1e-9);
    }

    #[test]
    fn inverted_or_empty_span_is_empty() {
        let path = right_angle();
        assert!(path.slice(0.6, 0.4).is_empty());
        assert!(path.slice(0.5, 0.5).is_empty());
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        let path = right_angle();
        let sliced = path.slice(-1.0, 2.0);
        assert!((sliced.arc_length() - path.arc_length()).abs() < 1e-9);
    }

    #[test]
    fn degenerate_path_slices_to_itself() {
        let path = Polyline::new(vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0)]);
        assert_eq!(path.slice(0.2, 0.8), path);
    }
}
