pub mod diagram;
pub mod finite;

pub use self::diagram::{Ridge, VoronoiDiagram};
pub use self::finite::{voronoi_finite_polygons_2d, FiniteVoronoi};
