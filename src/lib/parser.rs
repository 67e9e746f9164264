use super::builder::GeometryBuilder;
use super::coordinates::read_pair;
use super::error::ParseError;
use super::geojson::Feature;
use super::options::ParseOptions;
use super::ring::close_ring;
use log::{trace, warn};

/// Role expected of the next line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    AwaitingName,
    AwaitingRingStart,
    AwaitingCoordinateOrRingEnd,
    AwaitingRingHeaderOrEof,
}

impl State {
    fn expected(self) -> &'static str {
        match self {
            State::AwaitingName => "a feature name",
            State::AwaitingRingStart => "a ring header, a coordinate or END",
            State::AwaitingCoordinateOrRingEnd => "a coordinate or END",
            State::AwaitingRingHeaderOrEof => "a ring header or END",
        }
    }
}

/// Line driven parser for Osmosis polygon filter files.
///
/// Lines are pushed one at a time with [`Parser::feed`]. Once the input is
/// exhausted, [`Parser::finish`] hands out the feature, which only succeeds
/// if the last line completed the file.
///
/// Trailing whitespace is ignored when classifying a line. The name line is
/// kept as given, only a trailing carriage return is removed from it.
///
/// # Example
///
/// ```
/// use poly2geojson::{Geometry, ParseOptions, Parser};
///
/// let mut parser = Parser::new(ParseOptions::default());
/// for line in &["area", "1", " 1 0 0", " 2 1 0", " 3 1 1", "END", "END"] {
///     parser.feed(line)?;
/// }
/// let feature = parser.finish()?;
/// assert_eq!(feature.name(), "area");
/// if let Geometry::Polygon { coordinates } = feature.geometry {
///     assert_eq!(coordinates[0].len(), 4);
/// }
/// # Ok::<(), poly2geojson::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Parser {
    options: ParseOptions,
    state: State,
    name: String,
    builder: GeometryBuilder,
    line_number: usize,
    file_ended: bool,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser {
            options,
            state: State::AwaitingName,
            name: String::new(),
            builder: GeometryBuilder::new(),
            line_number: 0,
            file_ended: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn malformed(&self) -> ParseError {
        ParseError::MalformedInput {
            line: self.line_number,
            expected: self.state.expected(),
        }
    }

    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_number += 1;
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let next = self.transition(line)?;
        trace!(
            "line {}: {:?} -> {:?}",
            self.line_number,
            self.state,
            next
        );
        self.state = next;
        Ok(())
    }

    fn transition(&mut self, raw: &str) -> Result<State, ParseError> {
        use State::*;

        let line = raw.trim_end();
        match self.state {
            AwaitingName => {
                if line.is_empty() {
                    return Err(self.malformed());
                }
                self.name = raw.to_string();
                Ok(AwaitingRingStart)
            }
            AwaitingRingStart => {
                if line.is_empty() {
                    return Err(self.malformed());
                }
                if self.options.is_end_marker(line) {
                    return Ok(AwaitingRingHeaderOrEof);
                }
                match read_pair(line) {
                    Some(position) => self.builder.append_vertex(position),
                    None => self.builder.open_ring(),
                }
                Ok(AwaitingCoordinateOrRingEnd)
            }
            AwaitingCoordinateOrRingEnd => {
                if line.is_empty() {
                    return Err(self.malformed());
                }
                if self.options.is_end_marker(line) {
                    self.close_current_ring()?;
                    return Ok(AwaitingRingHeaderOrEof);
                }
                match read_pair(line) {
                    Some(position) => {
                        self.builder.append_vertex(position);
                        Ok(AwaitingCoordinateOrRingEnd)
                    }
                    None => {
                        self.builder.open_ring();
                        Ok(AwaitingRingStart)
                    }
                }
            }
            AwaitingRingHeaderOrEof => {
                if line.is_empty() {
                    return Ok(AwaitingRingHeaderOrEof);
                }
                if self.options.is_end_marker(line) {
                    self.file_ended = true;
                } else if self.options.is_subtraction(line) {
                    self.builder.open_ring();
                    return Ok(AwaitingRingStart);
                } else {
                    if !self.builder.is_multi_polygon() {
                        self.builder.promote_to_multi_polygon();
                    }
                    self.builder.open_polygon();
                    return Ok(AwaitingRingStart);
                }
                Ok(AwaitingRingHeaderOrEof)
            }
        }
    }

    fn close_current_ring(&mut self) -> Result<(), ParseError> {
        let precision = self.options.closure_precision;
        let line = self.line_number;
        let ring = match self.builder.current_ring_mut() {
            Some(ring) => ring,
            None => return Err(ParseError::InvalidRingClosure { line, vertices: 0 }),
        };
        if !close_ring(ring, precision) {
            return Err(ParseError::InvalidRingClosure {
                line,
                vertices: ring.len(),
            });
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Feature, ParseError> {
        if self.state != State::AwaitingRingHeaderOrEof {
            return Err(ParseError::MalformedInput {
                line: self.line_number + 1,
                expected: self.state.expected(),
            });
        }
        if !self.file_ended {
            warn!(
                "input ended after line {} without a closing {}",
                self.line_number, self.options.end_marker
            );
        }
        Ok(Feature::new(self.name, self.builder.build()))
    }
}
