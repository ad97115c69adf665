//! Stimulus rendering.
//!
//! Two back ends render the same [`QueryChain`](crate::chain::QueryChain)
//! into the two experimental dialects:
//!
//! - [`cte`] - nested `WITH name AS (...)` SQL
//! - [`pipe`] - linear `FROM base |> STAGE ...` SQL
//! - [`token`] - token types shared by both renderers
//! - [`locate`] - whole-word error-line location in rendered text
//!
//! Rendering is pure: the same chain always serializes to identical bytes,
//! so error line numbers are stable per dialect.

pub mod cte;
pub mod locate;
pub mod pipe;
pub mod token;

pub use locate::locate_identifier;
pub use token::{Token, TokenStream};

use crate::chain::QueryChain;
use serde::{Deserialize, Serialize};

/// The two rendered dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    Cte,
    Pipe,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Cte => "cte",
            Dialect::Pipe => "pipe",
        }
    }

    pub fn render(&self, chain: &QueryChain) -> String {
        match self {
            Dialect::Cte => cte::render(chain),
            Dialect::Pipe => pipe::render(chain),
        }
    }
}

/// Render the chain as nested CTE SQL.
pub fn render_cte(chain: &QueryChain) -> String {
    cte::render(chain)
}

/// Render the chain as linear pipe-syntax SQL.
pub fn render_pipe(chain: &QueryChain) -> String {
    pipe::render(chain)
}
