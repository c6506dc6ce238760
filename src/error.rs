use std::fmt;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Kept for API-shape continuity with node-name lookups; not raised by
    /// the centrality engine itself.
    NodeMissing,
    OutputBufferWrongLength,
    EmptyNetwork,
    InvalidEdgeWeight,
    AdjacencyMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
