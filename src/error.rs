//! Error management.

use crate::front_end::EdgeListRule;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "edge list is not valid UTF-8: {}", _0)]
    Encoding(std::str::Utf8Error),
    #[display(fmt = "{}", _0)]
    Parse(pest::error::Error<EdgeListRule>),
    #[display(fmt = "invalid number: {}", _0)]
    InvalidNumber(String),
    #[display(fmt = "negative {} in header: {}", _0, _1)]
    NegativeHeader(&'static str, i64),
    #[display(fmt = "expected {} edges, found {}", expected, found)]
    MissingEdges { expected: usize, found: usize },
    #[display(fmt = "edge {}: node numbers must be greater than zero, found {}", edge, id)]
    NegativeId { edge: usize, id: i64 },
    #[display(
        fmt = "edge {}: node id {} is outside 1..={}",
        edge,
        id,
        num_vertices
    )]
    IdOutOfRange {
        edge: usize,
        id: i64,
        num_vertices: usize,
    },
    #[display(
        fmt = "node count {} is too large: the adjacency matrix cannot be allocated",
        num_vertices
    )]
    GraphTooLarge { num_vertices: usize },
    #[display(fmt = "cannot build thread pool: {}", _0)]
    ThreadPool(String),
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<pest::error::Error<EdgeListRule>> for Error {
    fn from(e: pest::error::Error<EdgeListRule>) -> Self {
        Error::Parse(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
