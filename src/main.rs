use log::info;
use poly2geojson::output::Output;
use poly2geojson::{parse_reader, Geometry, ParseOptions};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "poly2geojson")]
struct Opt {
    /// Osmosis polygon filter file
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Write to this file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Emit the feature as a single JSON line
    #[structopt(long)]
    compact: bool,
    /// Include a bbox member
    #[structopt(long)]
    bbox: bool,
    #[structopt(long, default_value = "END")]
    end_marker: String,
    #[structopt(long, default_value = "!")]
    subtract_marker: char,
    /// Fractional digits compared when checking ring closure
    #[structopt(long, default_value = "12")]
    precision: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let options = ParseOptions {
        end_marker: opt.end_marker,
        subtract_marker: opt.subtract_marker,
        closure_precision: opt.precision,
    };

    let file = File::open(&opt.input)?;
    let mut feature = parse_reader(BufReader::new(file), &options)?;
    if opt.bbox {
        feature = feature.with_bbox();
    }

    let polygons = match &feature.geometry {
        Geometry::Polygon { .. } => 1,
        Geometry::MultiPolygon { coordinates } => coordinates.len(),
    };
    info!(
        "parsed {} from {} with {} polygon(s)",
        feature.name(),
        opt.input.display(),
        polygons
    );

    let mut writer: Box<dyn Write> = match opt.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    if opt.compact {
        feature.write_json_lines(&mut writer)?;
    } else {
        feature.write_geojson(&mut writer)?;
    }
    writer.flush()?;
    Ok(())
}
