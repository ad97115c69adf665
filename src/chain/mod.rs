//! Query chains - the arena-backed data model for stacked query levels.
//!
//! A [`QueryChain`] owns its levels in a `Vec` arena; `nodes[0]` is the base
//! level reading the raw `base` table and every later node reads the node
//! before it. The chain is built strictly forward and never revisited, so it
//! is acyclic by construction and cheap to clone.

pub mod builder;

pub use builder::{build_chain, BuildError};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Aggregate functions
// =============================================================================

/// SQL aggregate function used in generated levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggFunc {
    Sum,
    Count,
    Avg,
    Min,
    Max,
}

impl AggFunc {
    pub const ALL: [AggFunc; 5] = [
        AggFunc::Sum,
        AggFunc::Count,
        AggFunc::Avg,
        AggFunc::Min,
        AggFunc::Max,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggFunc::Sum => "SUM",
            AggFunc::Count => "COUNT",
            AggFunc::Avg => "AVG",
            AggFunc::Min => "MIN",
            AggFunc::Max => "MAX",
        }
    }

    /// Lowercased name, used for derived aliases (`sum_price`).
    pub fn lowercase(&self) -> &'static str {
        match self {
            AggFunc::Sum => "sum",
            AggFunc::Count => "count",
            AggFunc::Avg => "avg",
            AggFunc::Min => "min",
            AggFunc::Max => "max",
        }
    }
}

impl fmt::Display for AggFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One aggregate expression: `func(column) AS alias`.
///
/// Immutable once attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub func: AggFunc,
    pub column: String,
    pub alias: String,
}

// =============================================================================
// Error markers
// =============================================================================

/// Category of injected referential error.
///
/// Serialized with the experiment runner's historical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A projected column that was never introduced upstream.
    #[serde(rename = "SELECT_UNKNOWN")]
    AttributeUnknown,
    /// An aggregate over a column never introduced upstream.
    #[serde(rename = "AGG_UNKNOWN")]
    AggregateUnknown,
    /// A GROUP BY column never introduced upstream.
    #[serde(rename = "GROUP_UNKNOWN")]
    GroupUnknown,
}

impl ErrorKind {
    /// Structural weight the injected item adds to the CTE cost.
    pub fn injected_weight(&self) -> u32 {
        match self {
            ErrorKind::AggregateUnknown => 2,
            ErrorKind::AttributeUnknown | ErrorKind::GroupUnknown => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::AttributeUnknown => "SELECT_UNKNOWN",
            ErrorKind::AggregateUnknown => "AGG_UNKNOWN",
            ErrorKind::GroupUnknown => "GROUP_UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Which list of a node holds the injected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRole {
    Attribute,
    Aggregate,
    Group,
}

/// Marks the exact inserted invalid item on a node.
///
/// Set on at most one node per chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMarker {
    pub kind: ErrorKind,
    pub role: ErrorRole,
    pub index: usize,
}

// =============================================================================
// Query nodes and chains
// =============================================================================

/// One query level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryNode {
    /// Projected raw columns, in render order.
    pub attributes: Vec<String>,
    /// Grouping columns, in render order.
    pub group_by: Vec<String>,
    /// Aggregate expressions, in render order.
    pub aggregates: Vec<Aggregate>,
    /// Arena index of the level this one reads from; `None` means the raw
    /// `base` table (only ever the case for `nodes[0]`).
    pub source: Option<usize>,
    pub error_marker: Option<ErrorMarker>,
}

impl QueryNode {
    /// Columns this level exposes to the next one: attributes followed by
    /// aggregate aliases.
    pub fn exposed_columns(&self) -> Vec<String> {
        let mut cols = self.attributes.clone();
        cols.extend(self.aggregates.iter().map(|a| a.alias.clone()));
        cols
    }

    pub fn has_aggregates(&self) -> bool {
        !self.aggregates.is_empty()
    }

    pub fn has_group_by(&self) -> bool {
        !self.group_by.is_empty()
    }
}

/// A chain of stacked query levels, base first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryChain {
    pub nodes: Vec<QueryNode>,
}

impl QueryChain {
    /// Start a chain from a base level projecting the given columns.
    pub fn with_base(base_columns: Vec<String>) -> Self {
        let base = QueryNode {
            attributes: base_columns,
            ..Default::default()
        };
        Self { nodes: vec![base] }
    }

    /// Append a level reading from the current outermost node.
    pub fn push_level(&mut self, mut node: QueryNode) {
        node.source = Some(self.nodes.len() - 1);
        self.nodes.push(node);
    }

    pub fn base(&self) -> &QueryNode {
        &self.nodes[0]
    }

    /// Number of levels excluding the base.
    pub fn levels_excluding_base(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// CTE-dialect structural cost: attributes + 2x aggregates + group-by
    /// columns, accumulated along the source links.
    pub fn cost_cte(&self) -> u32 {
        self.nodes
            .iter()
            .map(|n| {
                n.attributes.len() as u32 + 2 * n.aggregates.len() as u32 + n.group_by.len() as u32
            })
            .sum()
    }

    /// Pipe-dialect structural cost: an aggregating level contributes its
    /// aggregates and group-by columns, a projection level its attributes.
    pub fn cost_pipe(&self) -> u32 {
        self.nodes
            .iter()
            .map(|n| {
                if n.has_aggregates() {
                    2 * n.aggregates.len() as u32 + n.group_by.len() as u32
                } else {
                    n.attributes.len() as u32
                }
            })
            .sum()
    }

    /// The node carrying the injected error, if any.
    pub fn error_node(&self) -> Option<(usize, &QueryNode, ErrorMarker)> {
        self.nodes
            .iter()
            .enumerate()
            .find_map(|(i, n)| n.error_marker.map(|m| (i, n, m)))
    }

    /// The injected unknown identifier, if an error was injected.
    pub fn unknown_name(&self) -> Option<&str> {
        let (_, node, marker) = self.error_node()?;
        match marker.role {
            ErrorRole::Attribute => node.attributes.get(marker.index).map(String::as_str),
            ErrorRole::Group => node.group_by.get(marker.index).map(String::as_str),
            ErrorRole::Aggregate => node.aggregates.get(marker.index).map(|a| a.column.as_str()),
        }
    }

    /// Every identifier appearing anywhere in the chain.
    ///
    /// Used to keep injected unknown names unambiguous against derived
    /// aggregate aliases, which are not pool words.
    pub fn identifiers(&self) -> HashSet<String> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            ids.extend(node.attributes.iter().cloned());
            ids.extend(node.group_by.iter().cloned());
            for agg in &node.aggregates {
                ids.insert(agg.column.clone());
                ids.insert(agg.alias.clone());
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_chain() -> QueryChain {
        let mut chain = QueryChain::with_base(words(&["price", "stock", "trade"]));
        chain.push_level(QueryNode {
            attributes: words(&["price"]),
            group_by: words(&["price"]),
            aggregates: vec![Aggregate {
                func: AggFunc::Sum,
                column: "stock".into(),
                alias: "total".into(),
            }],
            ..Default::default()
        });
        chain
    }

    #[test]
    fn test_source_links_are_forward() {
        let chain = sample_chain();
        assert_eq!(chain.nodes[0].source, None);
        assert_eq!(chain.nodes[1].source, Some(0));
        assert_eq!(chain.levels_excluding_base(), 1);
    }

    #[test]
    fn test_cost_cte_weights_aggregates_double() {
        let chain = sample_chain();
        // base: 3 attrs; level: 1 attr + 2*1 agg + 1 group
        assert_eq!(chain.cost_cte(), 3 + 1 + 2 + 1);
    }

    #[test]
    fn test_cost_pipe_skips_attributes_in_aggregating_levels() {
        let chain = sample_chain();
        // base: 3 attrs; level aggregates, so only 2*1 agg + 1 group
        assert_eq!(chain.cost_pipe(), 3 + 2 + 1);
    }

    #[test]
    fn test_exposed_columns_order() {
        let chain = sample_chain();
        assert_eq!(chain.nodes[1].exposed_columns(), words(&["price", "total"]));
    }

    #[test]
    fn test_unknown_name_reads_marker() {
        let mut chain = sample_chain();
        chain.nodes[1].group_by.insert(1, "ghost".into());
        chain.nodes[1].error_marker = Some(ErrorMarker {
            kind: ErrorKind::GroupUnknown,
            role: ErrorRole::Group,
            index: 1,
        });
        assert_eq!(chain.unknown_name(), Some("ghost"));
    }

    #[test]
    fn test_identifiers_include_aliases() {
        let chain = sample_chain();
        let ids = chain.identifiers();
        assert!(ids.contains("total"));
        assert!(ids.contains("stock"));
        assert!(ids.contains("trade"));
    }
}
