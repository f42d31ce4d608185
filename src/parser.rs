use std::path::PathBuf;

use clap::Parser;
use voronoi_map::LayerParameters;

/// Draw the finite Voronoi regions of a set of named locations
#[derive(Parser, Clone, Debug)]
pub struct Args {
    /// Path to a csv file with name, lat and lon columns, defaults to random points around Copenhagen
    #[arg(short, long)]
    pub in_file: Option<PathBuf>,

    /// Path of the svg output
    #[arg(short, long, default_value = "voronoi.svg")]
    pub output: PathBuf,

    /// Width of the drawing in pixels
    #[arg(long, default_value_t = 1024.)]
    pub width: f64,

    /// Height of the drawing in pixels
    #[arg(long, default_value_t = 768.)]
    pub height: f64,

    /// Distance in pixels to the points at infinity, defaults to twice the data range
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Number of random points used when no input file is given
    #[arg(long, default_value_t = 30)]
    pub random: usize,

    /// Seed for the random points
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the tooltip of the region under a screen position, given as x,y
    #[arg(long, value_parser = parse_position)]
    pub pick: Option<(f64, f64)>,
}

impl Args {
    pub fn parse_cli() -> Args {
        let mut args = Args::parse();

        args.width = args.width.max(100.);
        args.height = args.height.max(100.);
        args.random = args.random.max(2);

        args
    }

    pub fn layer_parameters(&self) -> LayerParameters {
        LayerParameters {
            radius: self.radius,
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }
}

fn parse_position(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected a position as x,y, got {s}"))?;

    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}
