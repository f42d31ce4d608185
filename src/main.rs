mod parser;

use parser::Args;

use fastrand::Rng;
use log::{log, Level};
use voronoi_map::{records::PointRecord, Result, VoronoiLayer};

// the area covered by the copenhagen s-tog network
const LON_RANGE: (f64, f64) = (12.25, 12.60);
const LAT_RANGE: (f64, f64) = (55.60, 55.85);

fn main() {
    env_logger::init();

    let args = Args::parse_cli();

    if let Err(e) = run(&args) {
        log!(Level::Error, "{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let data = match &args.in_file {
        Some(path) => voronoi_map::records::read_csv(path)?,
        None => random_records(args.random, args.seed),
    };
    log!(Level::Info, "Loaded {} points", data.len());

    let mut layer = VoronoiLayer::new(
        data,
        Some(Box::new(|r: &PointRecord| r.name.clone())),
        args.layer_parameters(),
    );

    let proj = layer.fit_projection()?;
    layer.invalidate(&proj)?;

    if let Some(painter) = layer.painter() {
        painter.save(&args.output)?;
        println!("Wrote {}", args.output.display());
    }

    if let Some((x, y)) = args.pick {
        match layer.pick(x, y) {
            Some(tooltip) => println!("{tooltip}"),
            None => println!("No region at ({x}, {y})"),
        }
    }
    Ok(())
}

fn random_records(num_points: usize, seed: Option<u64>) -> Vec<PointRecord> {
    let mut rng = match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    (0..num_points)
        .map(|i| PointRecord {
            name: format!("Point {}", i + 1),
            lat: LAT_RANGE.0 + rng.f64() * (LAT_RANGE.1 - LAT_RANGE.0),
            lon: LON_RANGE.0 + rng.f64() * (LON_RANGE.1 - LON_RANGE.0),
        })
        .collect()
}
