//! Convert Osmosis polygon filter files into GeoJSON features.
//!
//! A `.poly` file starts with a name, followed by rings of coordinates. Each
//! ring is introduced by a header line and terminated by `END`, rings with a
//! header starting with `!` are holes in the preceding polygon. A final `END`
//! closes the file.
//!
//! ```text
//! berlin
//! 1
//!    1.3088E+01   5.2338E+01
//!    1.3761E+01   5.2338E+01
//!    1.3761E+01   5.2675E+01
//! END
//! END
//! ```
use std::io::BufRead;

pub use self::error::ParseError;
pub use self::geojson::{Feature, Geometry, Position, Properties, Ring};
pub use self::options::ParseOptions;
pub use self::parser::{Parser, State};

mod builder;
pub mod coordinates;
mod error;
pub mod geo;
mod geojson;
mod options;
pub mod output;
mod parser;
mod ring;

/// Parse a sequence of lines into a feature.
///
/// # Example
///
/// ```
/// use poly2geojson::{parse, Geometry, ParseOptions};
///
/// let lines = vec!["boundary", "1", " 1 0.0 0.0", " 2 1.0 0.0", " 3 1.0 1.0", "END", "END"];
/// let feature = parse(lines, &ParseOptions::default()).unwrap();
/// match feature.geometry {
///     Geometry::Polygon { coordinates } => assert_eq!(coordinates[0][3], (0., 0.)),
///     _ => unreachable!(),
/// }
/// ```
pub fn parse<I, S>(lines: I, options: &ParseOptions) -> Result<Feature, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new(options.clone());
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    parser.finish()
}

/// Parse a polygon file from a reader, line by line.
pub fn parse_reader(reader: impl BufRead, options: &ParseOptions) -> Result<Feature, ParseError> {
    let mut parser = Parser::new(options.clone());
    for line in reader.lines() {
        parser.feed(&line?)?;
    }
    parser.finish()
}
