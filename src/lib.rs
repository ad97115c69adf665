//! # sqlstim
//!
//! A seed-driven generator of paired CTE / pipe-syntax SQL stimuli for
//! readability experiments.
//!
//! ## Architecture
//!
//! sqlstim builds chains of stacked query levels with a controlled
//! structural cost, optionally injects a single referential error at an
//! exact cost position, and renders each chain into two dialects:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Shape Enumeration (partitions + triplets)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [chain builder + word pool]
//! ┌─────────────────────────────────────────────────────────┐
//! │            QueryChain (arena of query levels)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [error injector (optional)]
//! ┌─────────────────────────────────────────────────────────┐
//! │        QueryChain + ErrorMarker (one invalid ref)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [dual renderer]
//! ┌─────────────────────────────────────────────────────────┐
//! │    CTE SQL text              Pipe SQL text               │
//! │    + error line number       + error line number         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [batch orchestrator]
//! ┌─────────────────────────────────────────────────────────┐
//! │       ResultRow records (experiment-runner input)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All randomness flows through one seeded [`rand::rngs::StdRng`], so a run
//! is fully reproducible from a single seed.

pub mod batch;
pub mod chain;
pub mod config;
pub mod inject;
pub mod partition;
pub mod shape;
pub mod sql;
pub mod words;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::batch::{run_batch, BatchOutcome, ComboReport, ResultRow};
    pub use crate::chain::{AggFunc, Aggregate, ErrorKind, ErrorRole, QueryChain, QueryNode};
    pub use crate::config::Settings;
    pub use crate::inject::inject_error;
    pub use crate::shape::{
        valid_triplet_sequences, AliasStrategy, DedupScope, GenOptions, Triplet,
    };
    pub use crate::sql::{locate_identifier, render_cte, render_pipe, Dialect};
    pub use crate::words::WordPool;
}

// Also export at crate root for convenience
pub use batch::{run_batch, BatchOutcome, ResultRow};
pub use chain::{AggFunc, ErrorKind, QueryChain};
pub use config::Settings;
pub use shape::{GenOptions, Triplet};
pub use sql::Dialect;
