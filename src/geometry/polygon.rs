use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    Coord, Line, LineString, Polygon,
};

pub trait MapRing {
    fn ring_signed_area(&self) -> Option<f64>;
    fn is_ccw_ring(&self) -> bool;
    fn is_simple_ring(&self) -> bool;
}

impl MapRing for LineString {
    fn ring_signed_area(&self) -> Option<f64> {
        if self.0.len() < 4 || !self.is_closed() {
            return None;
        }
        let mut area: f64 = 0.;
        for i in 0..self.0.len() - 1 {
            area += self.0[i].x * self.0[i + 1].y - self.0[i].y * self.0[i + 1].x;
        }
        Some(0.5 * area)
    }

    fn is_ccw_ring(&self) -> bool {
        self.ring_signed_area().is_some_and(|a| a > 0.)
    }

    fn is_simple_ring(&self) -> bool {
        if !self.is_closed() {
            return false;
        }
        let segments: Vec<Line> = self.lines().collect();
        let n = segments.len();
        if n < 3 {
            return false;
        }

        for i in 0..n {
            for j in i + 1..n {
                let neighbors = j == i + 1 || (i == 0 && j == n - 1);

                match line_intersection(segments[i], segments[j]) {
                    None => (),
                    // consecutive segments meet in their shared vertex only
                    Some(LineIntersection::SinglePoint { is_proper, .. }) if neighbors => {
                        if is_proper {
                            return false;
                        }
                    }
                    Some(_) => return false,
                }
            }
        }
        true
    }
}

/// closed polygon through the given vertex indices of `vertices`
pub fn polygon_from_indices(region: &[usize], vertices: &[Coord]) -> Polygon {
    Polygon::new(
        LineString::new(region.iter().map(|&i| vertices[i]).collect()),
        vec![],
    )
}
