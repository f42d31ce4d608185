#[derive(Clone, Debug, PartialEq)]
pub struct LayerParameters {
    /// distance to the points at infinity, defaults to twice the data range
    pub radius: Option<f64>,

    // viewport in pixels
    pub width: f64,
    pub height: f64,
    pub margin: f64,

    // drawing
    pub outline_color: [u8; 3],
    pub outline_width: f64,
    pub point_color: [u8; 3],
    pub point_radius: f64,
}

impl Default for LayerParameters {
    fn default() -> Self {
        Self {
            radius: None,
            width: 1024.,
            height: 768.,
            margin: 40.,
            outline_color: [255, 0, 0],
            outline_width: 5.,
            point_color: [0, 0, 255],
            point_radius: 4.,
        }
    }
}
