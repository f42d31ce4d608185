pub mod error;
pub mod geometry;
pub mod hotspot;
pub mod layer;
pub mod parameters;
pub mod projection;
pub mod records;
pub mod render;
pub mod voronoi;

pub use error::{Error, Result};
pub use layer::VoronoiLayer;
pub use parameters::LayerParameters;
pub use voronoi::{voronoi_finite_polygons_2d, FiniteVoronoi, Ridge, VoronoiDiagram};
