use crate::{
    geometry::{polygon_from_indices, MapRing, PointSet},
    Error, Result,
};

use geo::Coord;
use log::{log, Level};
use spade::{
    handles::{FaceHandle, InnerTag},
    DelaunayTriangulation, HasPosition, Point2, Triangulation,
};

// circumcenters closer than this (relative to the site extent) are the same vertex
const MERGE_EPSILON: f64 = 1e-10;

/// The shared boundary between two neighboring cells.
/// A `None` vertex marks an end of the ridge running off to infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ridge {
    pub sites: [usize; 2],
    pub vertices: [Option<usize>; 2],
}

/// Raw, possibly unbounded, Voronoi diagram of a point set.
///
/// `regions[i]` lists the vertices of the cell around site `i` in
/// counter-clockwise order, a `None` entry marks where the cell is open.
#[derive(Debug, Clone, Default)]
pub struct VoronoiDiagram {
    pub points: PointSet,
    pub vertices: Vec<Coord>,
    pub ridges: Vec<Ridge>,
    pub regions: Vec<Vec<Option<usize>>>,
}

struct Site {
    position: Point2<f64>,
    index: usize,
}

impl HasPosition for Site {
    type Scalar = f64;

    fn position(&self) -> Point2<Self::Scalar> {
        self.position
    }
}

impl VoronoiDiagram {
    /// Computes the diagram as the dual of the Delaunay triangulation of `points`
    pub fn from_points(points: &[Coord]) -> Result<VoronoiDiagram> {
        if points.len() < 2 {
            return Err(Error::TooFewSites(points.len()));
        }

        let sites = points
            .iter()
            .enumerate()
            .map(|(index, p)| Site {
                position: Point2::new(p.x, p.y),
                index,
            })
            .collect::<Vec<_>>();

        let dt = DelaunayTriangulation::<Site>::bulk_load_stable(sites)
            .map_err(Error::Triangulation)?;

        if dt.num_vertices() != points.len() {
            return Err(Error::DuplicateSites {
                unique: dt.num_vertices(),
                total: points.len(),
            });
        }

        let point_set = PointSet::from_coords(points);
        let tolerance = MERGE_EPSILON * point_set.ptp().max(1.);

        // one voronoi vertex per inner face, cocircular faces share theirs
        let mut vertices: Vec<Coord> = Vec::with_capacity(dt.num_inner_faces());
        let mut face_vertex: Vec<Option<usize>> = vec![None; dt.num_all_faces()];
        for face in dt.inner_faces() {
            if face_vertex[face.fix().index()].is_some() {
                continue;
            }
            let cc = circumcenter(face);
            let index = vertices.len();
            vertices.push(cc);
            face_vertex[face.fix().index()] = Some(index);

            // cocircular faces form a connected fan, flood it
            let mut stack = vec![face];
            while let Some(f) = stack.pop() {
                for edge in f.adjacent_edges() {
                    if let Some(neighbor) = edge.rev().face().as_inner() {
                        let slot = &mut face_vertex[neighbor.fix().index()];
                        if slot.is_none() && coincident(circumcenter(neighbor), cc, tolerance) {
                            *slot = Some(index);
                            stack.push(neighbor);
                        }
                    }
                }
            }
        }

        let mut ridges = Vec::with_capacity(dt.num_undirected_edges());
        for edge in dt.undirected_edges() {
            let edge = edge.as_directed();
            let sites = [edge.from().data().index, edge.to().data().index];
            let ends = [
                edge.face().as_inner().and_then(|f| face_vertex[f.fix().index()]),
                edge.rev()
                    .face()
                    .as_inner()
                    .and_then(|f| face_vertex[f.fix().index()]),
            ];

            if ends[0].is_some() && ends[0] == ends[1] {
                // collapsed between cocircular sites
                continue;
            }
            ridges.push(Ridge {
                sites,
                vertices: ends,
            });
        }

        let mut regions = vec![Vec::new(); points.len()];
        for vertex in dt.vertices() {
            // out edges are sorted counter-clockwise, each has its face to the left
            let mut region: Vec<Option<usize>> = vertex
                .out_edges()
                .map(|e| e.face().as_inner().and_then(|f| face_vertex[f.fix().index()]))
                .collect();

            region.dedup();
            while region.len() > 1 && region.first() == region.last() {
                region.pop();
            }
            if is_clockwise(&region, &vertices) {
                region.reverse();
            }
            regions[vertex.data().index] = region;
        }

        log!(
            Level::Debug,
            "Voronoi diagram of {} sites has {} vertices and {} ridges",
            points.len(),
            vertices.len(),
            ridges.len()
        );

        Ok(VoronoiDiagram {
            points: point_set,
            vertices,
            ridges,
            regions,
        })
    }

    pub fn is_finite_region(&self, site: usize) -> bool {
        self.regions[site].iter().all(Option::is_some)
    }
}

fn circumcenter(face: FaceHandle<'_, InnerTag, Site, (), (), ()>) -> Coord {
    let cc = face.circumcenter();
    Coord { x: cc.x, y: cc.y }
}

fn is_clockwise(region: &[Option<usize>], vertices: &[Coord]) -> bool {
    let Some(region) = region.iter().copied().collect::<Option<Vec<usize>>>() else {
        return false;
    };
    polygon_from_indices(&region, vertices)
        .exterior()
        .ring_signed_area()
        .is_some_and(|a| a < 0.)
}

fn coincident(a: Coord, b: Coord, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}
