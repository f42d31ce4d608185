use geo::{BoundingRect, Contains, Coord, Point, Polygon, Rect};
use kiddo::{immutable::float::kdtree::ImmutableKdTree, SquaredEuclidean};

/// Closed regions with a tooltip each, looked up from a pointer position.
///
/// Region `i` is expected to be the cell of site `i`, so the nearest site is
/// tried first before falling back to testing every region.
pub struct Hotspots {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
    regions: Vec<(Polygon, Option<Rect>, String)>,
}

impl Hotspots {
    pub fn new(sites: &[Coord], polygons: Vec<Polygon>, tooltips: Vec<String>) -> Hotspots {
        assert_eq!(sites.len(), polygons.len());
        assert_eq!(sites.len(), tooltips.len());

        let site_slice: Vec<[f64; 2]> = sites.iter().map(|c| [c.x, c.y]).collect();

        Hotspots {
            tree: ImmutableKdTree::new_from_slice(&site_slice),
            regions: polygons
                .into_iter()
                .zip(tooltips)
                .map(|(p, t)| {
                    let bounds = p.bounding_rect();
                    (p, bounds, t)
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn pick(&self, x: f64, y: f64) -> Option<&str> {
        if self.regions.is_empty() {
            return None;
        }
        let point = Point::new(x, y);

        let nearest = self.tree.nearest_one::<SquaredEuclidean>(&[x, y]).item;
        if let Some((polygon, _, tooltip)) = self.regions.get(nearest) {
            if polygon.contains(&point) {
                return Some(tooltip);
            }
        }

        // the closing chords of open cells can cut into a neighbors cell
        self.regions
            .iter()
            .filter(|(_, bounds, _)| bounds.is_some_and(|b| b.contains(&point)))
            .find(|(polygon, _, _)| polygon.contains(&point))
            .map(|(_, _, tooltip)| tooltip.as_str())
    }
}
