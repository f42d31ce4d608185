use crate::{Error, Result};

use geo::Coord;
use proj4rs::{transform::transform, Proj};

const WGS84: u16 = 4326;
const WEB_MERCATOR: u16 = 3857;

/// Maps lon/lat in degrees to screen pixels through web mercator.
///
/// The projection is fitted so the given points fill the viewport inside the
/// margin, screen y grows downwards.
pub struct ScreenProjection {
    wgs: Proj,
    mercator: Proj,
    min: Coord,
    offset: Coord,
    scale: f64,
    height: f64,
}

impl ScreenProjection {
    pub fn fit(lonlat: &[Coord], width: f64, height: f64, margin: f64) -> Result<ScreenProjection> {
        if lonlat.is_empty() {
            return Err(Error::EmptyPointSet);
        }

        let wgs = Proj::from_epsg_code(WGS84)?;
        let mercator = Proj::from_epsg_code(WEB_MERCATOR)?;

        let projected = to_mercator(&wgs, &mercator, lonlat)?;

        let mut min = Coord {
            x: f64::MAX,
            y: f64::MAX,
        };
        let mut max = Coord {
            x: f64::MIN,
            y: f64::MIN,
        };
        for p in projected.iter() {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let inner = Coord {
            x: (width - 2. * margin).max(1.),
            y: (height - 2. * margin).max(1.),
        };
        let extent = max - min;

        // a single location or a straight line only constrains one axis
        let scale = match (extent.x > 0., extent.y > 0.) {
            (true, true) => (inner.x / extent.x).min(inner.y / extent.y),
            (true, false) => inner.x / extent.x,
            (false, true) => inner.y / extent.y,
            (false, false) => 1.,
        };

        // center the data in the viewport
        let offset = Coord {
            x: margin + (inner.x - extent.x * scale) / 2.,
            y: margin + (inner.y - extent.y * scale) / 2.,
        };

        Ok(ScreenProjection {
            wgs,
            mercator,
            min,
            offset,
            scale,
            height,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn lonlat_to_mercator(&self, lonlat: &[Coord]) -> Result<Vec<Coord>> {
        to_mercator(&self.wgs, &self.mercator, lonlat)
    }

    pub fn lonlat_to_screen(&self, lonlat: &[Coord]) -> Result<Vec<Coord>> {
        Ok(self
            .lonlat_to_mercator(lonlat)?
            .into_iter()
            .map(|m| Coord {
                x: self.offset.x + (m.x - self.min.x) * self.scale,
                y: self.height - self.offset.y - (m.y - self.min.y) * self.scale,
            })
            .collect())
    }
}

fn to_mercator(wgs: &Proj, mercator: &Proj, lonlat: &[Coord]) -> Result<Vec<Coord>> {
    // proj4rs uses radians for geographic coordinates
    let mut points: Vec<(f64, f64)> = lonlat
        .iter()
        .map(|c| (c.x.to_radians(), c.y.to_radians()))
        .collect();

    transform(wgs, mercator, points.as_mut_slice())?;

    Ok(points.into_iter().map(|t| Coord { x: t.0, y: t.1 }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercator_origin_and_degree() -> Result<()> {
        let proj = ScreenProjection::fit(&[Coord { x: 0., y: 0. }], 100., 100., 0.)?;
        let m = proj.lonlat_to_mercator(&[Coord { x: 0., y: 0. }, Coord { x: 1., y: 0. }])?;

        assert!(m[0].x.abs() < 1e-6 && m[0].y.abs() < 1e-6);
        assert!((m[1].x - 111_319.49).abs() < 0.1);
        assert!(m[1].y.abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn fitted_points_stay_in_viewport() -> Result<()> {
        let lonlat = [
            Coord { x: 12.45, y: 55.61 },
            Coord { x: 12.65, y: 55.73 },
            Coord { x: 12.52, y: 55.68 },
        ];
        let proj = ScreenProjection::fit(&lonlat, 800., 600., 20.)?;
        let screen = proj.lonlat_to_screen(&lonlat)?;

        for s in screen.iter() {
            assert!(s.x >= 20. - 1e-9 && s.x <= 780. + 1e-9);
            assert!(s.y >= 20. - 1e-9 && s.y <= 580. + 1e-9);
        }

        // north is up on screen
        assert!(screen[1].y < screen[0].y);
        assert!(screen[1].x > screen[0].x);
        Ok(())
    }

    #[test]
    fn empty_fit_is_an_error() {
        assert!(matches!(
            ScreenProjection::fit(&[], 800., 600., 0.),
            Err(Error::EmptyPointSet)
        ));
    }
}
