use crate::{
    hotspot::Hotspots,
    parameters::LayerParameters,
    projection::ScreenProjection,
    records::PointRecord,
    render::SvgPainter,
    voronoi::{voronoi_finite_polygons_2d, FiniteVoronoi, VoronoiDiagram},
    Result,
};

use geo::Coord;
use log::{log, Level};

pub type Tooltip = Box<dyn Fn(&PointRecord) -> String>;

/// Draws the finite voronoi regions of a set of named points.
/// Regions get a tooltip each when a tooltip function is given
pub struct VoronoiLayer {
    data: Vec<PointRecord>,
    f_tooltip: Option<Tooltip>,
    params: LayerParameters,

    screen_points: Vec<Coord>,
    regions: Option<FiniteVoronoi>,
    painter: Option<SvgPainter>,
    hotspots: Option<Hotspots>,
}

impl VoronoiLayer {
    pub fn new(
        data: Vec<PointRecord>,
        f_tooltip: Option<Tooltip>,
        params: LayerParameters,
    ) -> VoronoiLayer {
        VoronoiLayer {
            data,
            f_tooltip,
            params,
            screen_points: Vec::new(),
            regions: None,
            painter: None,
            hotspots: None,
        }
    }

    /// fits a projection to the data with the layer's viewport
    pub fn fit_projection(&self) -> Result<ScreenProjection> {
        let lonlat: Vec<Coord> = self.data.iter().map(PointRecord::lonlat).collect();
        ScreenProjection::fit(
            &lonlat,
            self.params.width,
            self.params.height,
            self.params.margin,
        )
    }

    /// recomputes the regions, the drawing and the hotspots for a projection
    pub fn invalidate(&mut self, proj: &ScreenProjection) -> Result<()> {
        let lonlat: Vec<Coord> = self.data.iter().map(PointRecord::lonlat).collect();
        let points = proj.lonlat_to_screen(&lonlat)?;

        let vor = VoronoiDiagram::from_points(&points)?;
        let finite = voronoi_finite_polygons_2d(&vor, self.params.radius)?;

        let mut painter = SvgPainter::new(self.params.width, self.params.height);
        painter.set_color(self.params.outline_color);

        let mut tooltips = Vec::with_capacity(self.data.len());
        for (idx, record) in self.data.iter().enumerate() {
            let polygon = finite.region_coords(idx);
            let tooltip = self.f_tooltip.as_ref().map(|f| f(record));

            painter.linestrip(
                &polygon,
                self.params.outline_width,
                true,
                tooltip.as_deref(),
            );
            if let Some(tooltip) = tooltip {
                tooltips.push(tooltip);
            }
        }
        painter.set_color(self.params.point_color);
        painter.points(&points, self.params.point_radius);

        self.hotspots = if self.f_tooltip.is_some() {
            Some(Hotspots::new(&points, finite.polygons().collect(), tooltips))
        } else {
            None
        };

        log!(
            Level::Info,
            "Drew {} voronoi regions for {} points",
            finite.len(),
            self.data.len()
        );

        self.screen_points = points;
        self.regions = Some(finite);
        self.painter = Some(painter);
        Ok(())
    }

    /// tooltip of the region under the pointer
    pub fn pick(&self, mouse_x: f64, mouse_y: f64) -> Option<&str> {
        self.hotspots.as_ref()?.pick(mouse_x, mouse_y)
    }

    pub fn painter(&self) -> Option<&SvgPainter> {
        self.painter.as_ref()
    }

    pub fn regions(&self) -> Option<&FiniteVoronoi> {
        self.regions.as_ref()
    }

    pub fn screen_points(&self) -> &[Coord] {
        &self.screen_points
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.data
    }
}
