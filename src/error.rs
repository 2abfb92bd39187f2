use thiserror::Error;

use crate::color::VertexId;

/** errors raised while building an instance, reading a file or validating a budget.
The search itself never fails: these are all rejected before it starts. */
#[derive(Error, Debug)]
pub enum InputError {
    /// an edge endpoint is not a vertex of the graph
    #[error("edge ({u}, {v}) has an endpoint outside of 0..{n}")]
    VertexOutOfRange { u: i64, v: i64, n: usize },

    /// edges of the form (v,v) are not allowed
    #[error("self-loop on vertex {0}")]
    SelfLoop(VertexId),

    /// the number of vertices must be non-negative
    #[error("negative number of vertices: {0}")]
    NegativeVertexCount(i64),

    /// the number of vertices is larger than what an instance may hold
    #[error("{n} vertices requested, at most {max} are supported")]
    TooManyVertices { n: usize, max: usize },

    /// the color budget must be non-negative
    #[error("negative color budget: {0}")]
    NegativeColorBudget(i64),

    /// malformed DIMACS content
    #[error("DIMACS syntax error near: {0:?}")]
    DimacsSyntax(String),

    /// the header announces a number of edges that does not match the edge lines
    #[error("DIMACS header announces {expected} edges, read {found}")]
    EdgeCountMismatch { expected: usize, found: usize },

    /// a trace step refers to a vertex the graph does not have
    #[error("step {step} refers to vertex {vertex}, the graph has {n} vertices")]
    TraceMismatch { step: usize, vertex: VertexId, n: usize },

    /// a trace is not a sequence of steps a search could have produced
    #[error("invalid trace at step {step}: {reason}")]
    InvalidTrace { step: usize, reason: String },

    /// a numeric parameter could not be parsed
    #[error("unable to parse {name}: {value:?}")]
    InvalidParameter { name: String, value: String },

    /// file system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// (de)serialization error for traces and statistics
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
