use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error("Requires 2D input, the point set has dimension {0}")]
    InvalidDimension(usize),
    #[error("A point set of dimension {dim} cannot hold {len} coordinates")]
    MalformedPointSet { dim: usize, len: usize },
    #[error("A Voronoi diagram needs at least two sites, got {0}")]
    TooFewSites(usize),
    #[error("The point set contains duplicate sites, {unique} of {total} are distinct")]
    DuplicateSites { unique: usize, total: usize },
    #[error("Unable to triangulate the sites: {0:?}")]
    Triangulation(spade::InsertionError),
    #[error("Cannot fit a projection to an empty point set")]
    EmptyPointSet,
    #[error(transparent)]
    ProjError(#[from] proj4rs::errors::Error),
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
