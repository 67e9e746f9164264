use super::geojson::Position;
use itertools::Itertools;
use log::warn;

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Read a coordinate line as a `(lon, lat)` pair.
///
/// Coordinate lines carry an index column in front of the two numbers. In
/// files written by Osmosis that column is just the indentation, so a line
/// with exactly two tokens is read as `lon lat`, while a line with three or
/// more tokens drops the first one.
///
/// Returns `None` for anything else, so the caller can treat the line as a
/// ring marker. When the tokens are there but are not numbers a warning is
/// logged.
///
/// # Example
///
/// ```
/// use poly2geojson::coordinates::read_pair;
///
/// assert_eq!(read_pair("   1.5E+01   5.2E+01"), Some((15., 52.)));
/// assert_eq!(read_pair(" 3 13.4 52.5"), Some((13.4, 52.5)));
/// assert_eq!(read_pair("END"), None);
/// ```
pub fn read_pair(line: &str) -> Option<Position> {
    let tokens = line.split_whitespace().collect_vec();
    let (lon, lat) = match tokens.len() {
        0 | 1 => return None,
        2 => (tokens[0], tokens[1]),
        _ => (tokens[1], tokens[2]),
    };

    match (parse_number(lon), parse_number(lat)) {
        (Some(lon), Some(lat)) => Some((lon, lat)),
        _ => {
            warn!(
                "unparsable coordinate tokens [{}], treating line as ring marker",
                [lon, lat].iter().join(", ")
            );
            None
        }
    }
}
