//! Error types for graphex.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are raised
//! by the call that detects the violated precondition and are never recovered
//! internally.

use thiserror::Error;

/// Result type alias for graphex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in graphex operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index (or union-find element) outside `[0, len)`.
    #[error("Index {index} out of range (len {len})")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },

    /// Argument rejected at construction or insertion time.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Neither direction of the requested edge exists.
    #[error("Edge {from} - {to} does not exist")]
    EdgeNotFound {
        /// First endpoint passed by the caller.
        from: usize,
        /// Second endpoint passed by the caller.
        to: usize,
    },

    /// Removal attempted on an empty collection.
    #[error("{0} is empty")]
    EmptyCollection(&'static str),

    /// Insertion attempted on a collection at capacity.
    #[error("Priority queue is full (capacity {capacity})")]
    FullCollection {
        /// Fixed capacity of the collection.
        capacity: usize,
    },

    /// Vertex is not currently tracked by the priority queue.
    #[error("Vertex {0} not in priority queue")]
    NotInCollection(usize),

    /// `decrease_key` was asked to raise a priority.
    #[error("New priority {requested} for vertex {vertex} is greater than current priority {current}")]
    InvalidKeyUpdate {
        /// Vertex whose key was updated.
        vertex: usize,
        /// Priority currently stored in the heap, rendered.
        current: String,
        /// Priority requested by the caller, rendered.
        requested: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Fieldless discriminant of [`Error`], for matching on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::OutOfRange`].
    OutOfRange,
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::EdgeNotFound`].
    EdgeNotFound,
    /// See [`Error::EmptyCollection`].
    EmptyCollection,
    /// See [`Error::FullCollection`].
    FullCollection,
    /// See [`Error::NotInCollection`].
    NotInCollection,
    /// See [`Error::InvalidKeyUpdate`].
    InvalidKeyUpdate,
    /// See [`Error::Config`].
    Config,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::EdgeNotFound { .. } => ErrorKind::EdgeNotFound,
            Self::EmptyCollection(_) => ErrorKind::EmptyCollection,
            Self::FullCollection { .. } => ErrorKind::FullCollection,
            Self::NotInCollection(_) => ErrorKind::NotInCollection,
            Self::InvalidKeyUpdate { .. } => ErrorKind::InvalidKeyUpdate,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns a stable error code for logs and CLI output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::OutOfRange => "GRAPHEX-001",
            ErrorKind::InvalidArgument => "GRAPHEX-002",
            ErrorKind::EdgeNotFound => "GRAPHEX-003",
            ErrorKind::EmptyCollection => "GRAPHEX-004",
            ErrorKind::FullCollection => "GRAPHEX-005",
            ErrorKind::NotInCollection => "GRAPHEX-006",
            ErrorKind::InvalidKeyUpdate => "GRAPHEX-007",
            ErrorKind::Config => "GRAPHEX-008",
        }
    }

    /// Checks `index < len`, returning [`Error::OutOfRange`] otherwise.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }
}
