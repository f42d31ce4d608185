use crate::{Error, Result};

use geo::Coord;

/// Sites stored as a flat n x d coordinate table
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dim: usize,
    coords: Vec<f64>,
}

impl Default for PointSet {
    fn default() -> Self {
        PointSet {
            dim: 2,
            coords: vec![],
        }
    }
}

impl PointSet {
    pub fn new(dim: usize, coords: Vec<f64>) -> Result<PointSet> {
        if dim == 0 || coords.len() % dim != 0 {
            return Err(Error::MalformedPointSet {
                dim,
                len: coords.len(),
            });
        }
        Ok(PointSet { dim, coords })
    }

    pub fn from_coords(points: &[Coord]) -> PointSet {
        let mut coords = Vec::with_capacity(2 * points.len());
        for p in points {
            coords.push(p.x);
            coords.push(p.y);
        }
        PointSet { dim: 2, coords }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// the first two components of point `index`
    pub fn coord(&self, index: usize) -> Coord {
        let start = index * self.dim;
        Coord {
            x: self.coords[start],
            y: self.coords[start + 1],
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.chunks_exact(self.dim).map(|c| Coord { x: c[0], y: c[1] })
    }

    pub fn mean(&self) -> Coord {
        let mut sum = Coord { x: 0., y: 0. };
        for c in self.coords() {
            sum = sum + c;
        }
        sum / self.len() as f64
    }

    /// peak to peak of the flattened coordinate table, the range over every
    /// component of every point taken together
    pub fn ptp(&self) -> f64 {
        let mut range = (f64::MAX, f64::MIN);
        for &v in self.coords.iter() {
            range.0 = range.0.min(v);
            range.1 = range.1.max(v);
        }
        if self.coords.is_empty() {
            0.
        } else {
            range.1 - range.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_point_set() {
        let ps = PointSet::new(3, vec![0., 1., 2., 3.]);
        assert!(matches!(
            ps,
            Err(Error::MalformedPointSet { dim: 3, len: 4 })
        ));
        assert!(PointSet::new(0, vec![]).is_err());
    }

    #[test]
    fn mean_and_len() {
        let ps = PointSet::from_coords(&[
            Coord { x: 0., y: 0. },
            Coord { x: 2., y: 0. },
            Coord { x: 2., y: 4. },
            Coord { x: 0., y: 4. },
        ]);

        assert_eq!(ps.len(), 4);
        assert_eq!(ps.dim(), 2);
        assert_eq!(ps.mean(), Coord { x: 1., y: 2. });
    }

    #[test]
    fn ptp_is_taken_over_all_components() -> Result<()> {
        // x spans 100..101 and y spans 0..1, the flattened range is 101
        let ps = PointSet::new(2, vec![100., 0., 101., 1.])?;

        assert_eq!(ps.ptp(), 101.);
        Ok(())
    }

    #[test]
    fn coord_skips_higher_components() -> Result<()> {
        let ps = PointSet::new(3, vec![1., 2., 3., 4., 5., 6.])?;

        assert_eq!(ps.len(), 2);
        assert_eq!(ps.coord(1), Coord { x: 4., y: 5. });
        Ok(())
    }
}
