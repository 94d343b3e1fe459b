use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures that indicate a bug in the caller or a malformed problem
/// definition. Puzzle-level dead ends (an emptied domain, a violated
/// constraint) are not errors; the search recovers from those by rolling
/// back the trail.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("undo called with no outstanding trail marker")]
    UndoWithoutMarker,
    #[error("push called with no outstanding trail marker")]
    PushWithoutMarker,
    #[error("block shape {block_rows}x{block_cols} does not tile a grid of side {side}")]
    InvalidBlockShape {
        block_rows: usize,
        block_cols: usize,
        side: usize,
    },
    #[error("grid has {actual} cells, expected {expected}")]
    WrongCellCount { actual: usize, expected: usize },
    #[error("cell value {value} is outside 0..={side}")]
    ValueOutOfRange { value: i32, side: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
