//! Exact backtracking graph coloring that records every assignment and retraction
//! in a replayable trace.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, colorings and checker
pub mod color;

/// graph instance (validated edge list) and graph edition
pub mod graph;

/// errors raised when reading or validating an input
pub mod error;

/// read/write DIMACS formats
pub mod dimacs;

/// random graph generation
pub mod generator;

/// steps, traces and replay
pub mod trace;

/// step by step replay of a trace
pub mod player;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the graph coloring problem
pub mod search;
