use thiserror::Error;

/// Reasons a polygon file could not be turned into a feature.
///
/// Line numbers are 1-based and refer to the line being processed when the
/// parse was aborted.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not complete parse: line {line}: expected {expected}")]
    MalformedInput { line: usize, expected: &'static str },
    #[error("could not complete parse: line {line}: ring has {vertices} vertices, at least 3 are required")]
    InvalidRingClosure { line: usize, vertices: usize },
    #[error("could not complete parse: {0}")]
    Io(#[from] std::io::Error),
}
