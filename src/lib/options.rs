/// Markers and precision used while parsing a polygon file.
///
/// The defaults match the Osmosis polygon filter format: rings and the file
/// itself are terminated by `END`, hole rings are introduced by a header
/// starting with `!` and ring closure compares coordinates rounded to 12
/// fractional digits.
///
/// # Example
///
/// ```
/// use poly2geojson::ParseOptions;
///
/// let options = ParseOptions {
///     end_marker: "FIN".into(),
///     ..Default::default()
/// };
/// assert_eq!(options.subtract_marker, '!');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    pub end_marker: String,
    pub subtract_marker: char,
    pub closure_precision: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            end_marker: "END".into(),
            subtract_marker: '!',
            closure_precision: 12,
        }
    }
}

impl ParseOptions {
    pub fn is_end_marker(&self, line: &str) -> bool {
        line == self.end_marker
    }

    pub fn is_subtraction(&self, line: &str) -> bool {
        line.starts_with(self.subtract_marker)
    }
}
