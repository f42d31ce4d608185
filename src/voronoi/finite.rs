use super::VoronoiDiagram;
use crate::{
    geometry::{polygon_from_indices, MapRing},
    Error, Result,
};

use geo::{Coord, Polygon, Vector2DOps};
use log::{log, Level};

/// Voronoi regions closed off at a finite distance.
///
/// `vertices` starts with the vertices of the input diagram, the far points
/// synthesized for the open ridges are appended after them in the order they
/// were created. Every region is a counter-clockwise list of indices into it.
#[derive(Debug, Clone, PartialEq)]
pub struct FiniteVoronoi {
    pub regions: Vec<Vec<usize>>,
    pub vertices: Vec<Coord>,
}

impl FiniteVoronoi {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region_coords(&self, site: usize) -> Vec<Coord> {
        self.regions[site].iter().map(|&v| self.vertices[v]).collect()
    }

    pub fn polygon(&self, site: usize) -> Polygon {
        polygon_from_indices(&self.regions[site], &self.vertices)
    }

    pub fn polygons(&self) -> impl Iterator<Item = Polygon> + '_ {
        (0..self.regions.len()).map(|site| self.polygon(site))
    }
}

/// Reconstruct the infinite regions of a 2D Voronoi diagram to finite regions.
///
/// Every open ridge gets its missing end placed `radius` away from its finite
/// vertex, pointing away from the mean of the sites. Without a radius twice
/// the peak to peak range of the site coordinates is used.
pub fn voronoi_finite_polygons_2d(
    vor: &VoronoiDiagram,
    radius: Option<f64>,
) -> Result<FiniteVoronoi> {
    if vor.points.dim() != 2 {
        return Err(Error::InvalidDimension(vor.points.dim()));
    }

    let mut new_regions = Vec::with_capacity(vor.regions.len());
    let mut new_vertices = vor.vertices.clone();

    let center = vor.points.mean();
    let radius = radius.unwrap_or_else(|| 2. * vor.points.ptp());

    // ridges by site, every ridge listed under both of its sites
    let mut all_ridges = vec![Vec::new(); vor.points.len()];
    for ridge in vor.ridges.iter() {
        let [p1, p2] = ridge.sites;
        let [v1, v2] = ridge.vertices;
        all_ridges[p1].push((p2, v1, v2));
        all_ridges[p2].push((p1, v1, v2));
    }

    let mut num_far_points = 0;
    for (p1, region) in vor.regions.iter().enumerate() {
        let mut new_region: Vec<usize> = region.iter().flatten().copied().collect();

        if new_region.len() == region.len() {
            // finite region, only the winding may change
            if polygon_from_indices(&new_region, &new_vertices)
                .exterior()
                .ring_signed_area()
                .is_some_and(|a| a < 0.)
            {
                new_region.reverse();
            }
            new_regions.push(new_region);
            continue;
        }

        let site = vor.points.coord(p1);
        let mut open_line = None;

        for &(p2, v1, v2) in all_ridges[p1].iter() {
            let (v1, v2) = if v2.is_none() { (v2, v1) } else { (v1, v2) };
            if v1.is_some() {
                // both ends are vertices of the region already
                continue;
            }

            let neighbor = vor.points.coord(p2);
            let Some(t) = (neighbor - site).try_normalize() else {
                log!(
                    Level::Warn,
                    "Sites {p1} and {p2} coincide, skipping the ridge between them"
                );
                continue;
            };
            let n = t.left();

            let midpoint = (site + neighbor) / 2.;
            let direction = if (midpoint - center).dot_product(n) < 0. {
                -n
            } else {
                n
            };

            match v2 {
                Some(v2) => {
                    let far_point = vor.vertices[v2] + direction * radius;

                    new_region.push(new_vertices.len());
                    new_vertices.push(far_point);
                    num_far_points += 1;
                }
                None => {
                    // open in both ends, the ridge is the entire bisector
                    let a = midpoint + direction * radius;
                    let b = midpoint - direction * radius;

                    new_region.push(new_vertices.len());
                    new_vertices.push(a);
                    new_region.push(new_vertices.len());
                    new_vertices.push(b);
                    num_far_points += 2;

                    open_line = Some((a, b, t));
                }
            }
        }

        // a single bisector bounds only one side, mirror it away from the neighbor
        if new_region.len() < 3 {
            if let Some((a, b, t)) = open_line {
                new_region.push(new_vertices.len());
                new_vertices.push(a - t * radius);
                new_region.push(new_vertices.len());
                new_vertices.push(b - t * radius);
                num_far_points += 2;
            }
        }

        if new_region.len() < 3 {
            log!(
                Level::Warn,
                "The region of site {p1} has only {} vertices and cannot be closed",
                new_region.len()
            );
        }

        sort_counterclockwise(&mut new_region, &new_vertices);
        new_regions.push(new_region);
    }

    log!(
        Level::Debug,
        "Closed {} regions with {} far points at radius {radius}",
        new_regions.len(),
        num_far_points
    );

    Ok(FiniteVoronoi {
        regions: new_regions,
        vertices: new_vertices,
    })
}

/// sorts the vertex indices by their angle around the centroid of the vertices
fn sort_counterclockwise(region: &mut Vec<usize>, vertices: &[Coord]) {
    if region.is_empty() {
        return;
    }

    let c = region
        .iter()
        .fold(Coord { x: 0., y: 0. }, |acc, &v| acc + vertices[v])
        / region.len() as f64;

    let mut angles: Vec<(usize, f64)> = region
        .iter()
        .map(|&v| (v, (vertices[v].y - c.y).atan2(vertices[v].x - c.x)))
        .collect();
    angles.sort_by(|a, b| a.1.total_cmp(&b.1));

    *region = angles.into_iter().map(|(v, _)| v).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::PointSet, voronoi::Ridge};

    fn coords(points: &[(f64, f64)]) -> Vec<Coord> {
        points.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn three_dimensional_input_is_rejected() -> Result<()> {
        let vor = VoronoiDiagram {
            points: PointSet::new(3, vec![0., 0., 0., 1., 0., 0., 0., 1., 0.])?,
            ..Default::default()
        };

        let res = voronoi_finite_polygons_2d(&vor, None);
        assert!(matches!(res, Err(Error::InvalidDimension(3))));
        Ok(())
    }

    #[test]
    fn finite_region_is_kept() -> Result<()> {
        let vor = VoronoiDiagram::from_points(&coords(&[
            (0., 0.),
            (4., 0.),
            (4., 4.),
            (0., 4.),
            (2., 2.1),
        ]))?;
        let finite = voronoi_finite_polygons_2d(&vor, None)?;

        let mut expected: Vec<usize> = vor.regions[4].iter().flatten().copied().collect();
        let mut region = finite.regions[4].clone();
        expected.sort();
        region.sort();
        assert_eq!(region, expected);
        assert!(finite.polygon(4).exterior().is_ccw_ring());
        Ok(())
    }

    #[test]
    fn clockwise_finite_region_is_reversed() -> Result<()> {
        let vor = VoronoiDiagram {
            points: PointSet::from_coords(&coords(&[(0.2, 0.2)])),
            vertices: coords(&[(0., 0.), (1., 0.), (0., 1.)]),
            ridges: vec![],
            regions: vec![vec![Some(0), Some(2), Some(1)]],
        };
        let finite = voronoi_finite_polygons_2d(&vor, None)?;

        assert_eq!(finite.regions[0], vec![1, 2, 0]);
        assert_eq!(finite.vertices, vor.vertices);
        Ok(())
    }

    #[test]
    fn far_points_are_placed_at_radius() -> Result<()> {
        let vor = VoronoiDiagram::from_points(&coords(&[(0., 0.), (1., 0.), (0., 1.), (1., 1.)]))?;
        let finite = voronoi_finite_polygons_2d(&vor, Some(10.))?;

        // one far point per open ridge end seen from each of its two sites
        assert_eq!(finite.vertices.len(), vor.vertices.len() + 8);
        for far in finite.vertices.iter().skip(vor.vertices.len()) {
            let d = *far - vor.vertices[0];
            assert!((d.magnitude() - 10.).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn far_points_point_away_from_center() -> Result<()> {
        // hand built half plane split: two sites, one ridge with a single finite end
        let vor = VoronoiDiagram {
            points: PointSet::from_coords(&coords(&[(0., 0.), (2., 0.), (1., -3.)])),
            vertices: coords(&[(1., -1.)]),
            ridges: vec![Ridge {
                sites: [0, 1],
                vertices: [None, Some(0)],
            }],
            regions: vec![vec![Some(0), None], vec![None, Some(0)], vec![Some(0)]],
        };
        let finite = voronoi_finite_polygons_2d(&vor, Some(5.))?;

        // center is below the midpoint of site 0 and 1, the ridge opens upwards
        assert_eq!(finite.vertices.len(), 3);
        assert_eq!(finite.vertices[1], Coord { x: 1., y: 4. });
        assert_eq!(finite.vertices[2], Coord { x: 1., y: 4. });
        Ok(())
    }

    #[test]
    fn reconstruction_is_deterministic() -> Result<()> {
        let vor = VoronoiDiagram::from_points(&coords(&[
            (0.3, 0.1),
            (2.4, 0.7),
            (1.1, 3.3),
            (3.9, 2.6),
            (2.2, 1.8),
            (0.4, 2.0),
        ]))?;

        let first = voronoi_finite_polygons_2d(&vor, None)?;
        let second = voronoi_finite_polygons_2d(&vor, None)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn sort_counterclockwise_orders_by_angle() {
        let vertices = coords(&[(1., 1.), (-1., -1.), (-1., 1.), (1., -1.)]);
        let mut region = vec![0, 1, 2, 3];

        sort_counterclockwise(&mut region, &vertices);
        assert_eq!(region, vec![1, 3, 0, 2]);
    }
}
