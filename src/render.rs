use crate::Result;

use geo::Coord;
use std::path::Path;
use svg::{
    node::{
        element::{path::Data, Circle, Element, Path as SvgPath},
        Text,
    },
    Document, Node,
};

/// Collects drawing calls into a single svg document
pub struct SvgPainter {
    document: Document,
    color: [u8; 3],
    num_shapes: usize,
}

impl SvgPainter {
    pub fn new(width: f64, height: f64) -> SvgPainter {
        SvgPainter {
            document: Document::new()
                .set("viewBox", format!("0 0 {width} {height}"))
                .set("width", width as f32)
                .set("height", height as f32),
            color: [0, 0, 0],
            num_shapes: 0,
        }
    }

    pub fn set_color(&mut self, color: [u8; 3]) {
        self.color = color;
    }

    pub fn num_shapes(&self) -> usize {
        self.num_shapes
    }

    /// draws a polyline, the tooltip shows when hovering the drawn shape
    pub fn linestrip(&mut self, points: &[Coord], width: f64, closed: bool, tooltip: Option<&str>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let mut data = Data::new().move_to((first.x as f32, first.y as f32));
        for p in rest {
            data = data.line_to((p.x as f32, p.y as f32));
        }
        if closed {
            data = data.close();
        }

        let mut path = SvgPath::new()
            .set("fill", if closed { "transparent" } else { "none" })
            .set("stroke", self.rgb())
            .set("stroke-width", width as f32)
            .set("stroke-linejoin", "round")
            .set("d", data);

        if let Some(tooltip) = tooltip {
            let mut title = Element::new("title");
            title.append(Text::new(tooltip));
            path.append(title);
        }

        self.document.append(path);
        self.num_shapes += 1;
    }

    pub fn points(&mut self, points: &[Coord], radius: f64) {
        for p in points {
            self.document.append(
                Circle::new()
                    .set("cx", p.x as f32)
                    .set("cy", p.y as f32)
                    .set("r", radius as f32)
                    .set("fill", self.rgb()),
            );
            self.num_shapes += 1;
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        svg::save(path, &self.document)?;
        Ok(())
    }

    fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.color[0], self.color[1], self.color[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlines_and_points_are_drawn() {
        let mut painter = SvgPainter::new(100., 100.);

        painter.set_color([255, 0, 0]);
        painter.linestrip(
            &[
                Coord { x: 10., y: 10. },
                Coord { x: 90., y: 10. },
                Coord { x: 50., y: 80. },
            ],
            5.,
            true,
            Some("Nørreport"),
        );
        painter.set_color([0, 0, 255]);
        painter.points(&[Coord { x: 50., y: 30. }, Coord { x: 20., y: 20. }], 3.);

        let svg = painter.document().to_string();

        assert_eq!(painter.num_shapes(), 3);
        assert_eq!(svg.matches("<path").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("rgb(255,0,0)"));
        assert!(svg.contains("rgb(0,0,255)"));
        assert!(svg.contains("<title>"));
        assert!(svg.contains("Nørreport"));
    }

    #[test]
    fn empty_linestrip_is_skipped() {
        let mut painter = SvgPainter::new(10., 10.);
        painter.linestrip(&[], 1., true, None);

        assert_eq!(painter.num_shapes(), 0);
    }
}
