//! Error injection - splice exactly one referentially invalid identifier
//! into a chain at a precise structural-cost position.
//!
//! The walk runs base-first and mirrors the CTE cost accounting: raw
//! attributes and group-by columns cost 1, aggregates cost 2. Insertion
//! points sit between items, so a target cost of `k` lands the new
//! identifier where the running counter would reach `k`.

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::chain::{AggFunc, Aggregate, ErrorKind, ErrorMarker, ErrorRole, QueryChain};
use crate::words::WordPool;

/// Why an injection attempt was abandoned.
///
/// All variants are expected per-attempt failures; the caller discards the
/// chain and retries with a different one. No partially injected chain is
/// ever observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    #[error("target cost lands in a node where this error kind is not placeable")]
    IneligibleNode,
    #[error("chain ends before the target cost is reached")]
    OutOfRange,
    #[error("word pool exhausted while naming the unknown identifier")]
    WordsExhausted,
}

/// Inject one error of `kind` so the inserted item sits exactly at
/// `target_cost` in the CTE cost walk. Returns the marker recorded on the
/// mutated node.
pub fn inject_error<R: Rng + ?Sized>(
    chain: &mut QueryChain,
    kind: ErrorKind,
    target_cost: u32,
    words: &mut WordPool,
    rng: &mut R,
) -> Result<ErrorMarker, InjectError> {
    if target_cost == 0 {
        return Err(InjectError::OutOfRange);
    }

    // The unknown name must not collide with anything already in the chain,
    // including derived aliases that never came from the pool.
    let forbidden = chain.identifiers();
    let mut fresh = |words: &mut WordPool| {
        words
            .pull_excluding(1, &forbidden)
            .pop()
            .ok_or(InjectError::WordsExhausted)
    };

    let mut counter = 0u32;

    for node in chain.nodes.iter_mut() {
        match kind {
            ErrorKind::AttributeUnknown => {
                // A lone unknown column can only appear in a pure
                // projection level; anywhere else it would also need to be
                // aggregated or grouped.
                let only_select = node.aggregates.is_empty() && node.group_by.is_empty();

                for i in 0..=node.attributes.len() {
                    if counter + 1 == target_cost {
                        if !only_select {
                            return Err(InjectError::IneligibleNode);
                        }
                        let name = fresh(words)?;
                        node.attributes.insert(i, name);
                        let marker = ErrorMarker {
                            kind,
                            role: ErrorRole::Attribute,
                            index: i,
                        };
                        node.error_marker = Some(marker);
                        return Ok(marker);
                    }
                    if i < node.attributes.len() {
                        counter += 1;
                    }
                }
                for _ in &node.aggregates {
                    for _ in 0..2 {
                        if counter + 1 == target_cost {
                            return Err(InjectError::IneligibleNode);
                        }
                        counter += 1;
                    }
                }
                for _ in &node.group_by {
                    if counter + 1 == target_cost {
                        return Err(InjectError::IneligibleNode);
                    }
                    counter += 1;
                }
            }

            ErrorKind::AggregateUnknown => {
                for _ in &node.attributes {
                    if counter + 1 == target_cost {
                        return Err(InjectError::IneligibleNode);
                    }
                    counter += 1;
                }
                for i in 0..=node.aggregates.len() {
                    if counter + 1 == target_cost {
                        // Attributes without a GROUP BY rule out adding an
                        // aggregate to this level.
                        if !node.attributes.is_empty() && node.group_by.is_empty() {
                            return Err(InjectError::IneligibleNode);
                        }
                        let column = fresh(words)?;
                        let alias = fresh(words)?;
                        let func = *AggFunc::ALL
                            .choose(rng)
                            .expect("aggregate function list is non-empty");
                        node.aggregates.insert(i, Aggregate { func, column, alias });
                        let marker = ErrorMarker {
                            kind,
                            role: ErrorRole::Aggregate,
                            index: i,
                        };
                        node.error_marker = Some(marker);
                        return Ok(marker);
                    }
                    if i < node.aggregates.len() {
                        counter += 2;
                    }
                }
                for _ in &node.group_by {
                    if counter + 1 == target_cost {
                        return Err(InjectError::IneligibleNode);
                    }
                    counter += 1;
                }
            }

            ErrorKind::GroupUnknown => {
                for _ in &node.attributes {
                    if counter + 1 == target_cost {
                        return Err(InjectError::IneligibleNode);
                    }
                    counter += 1;
                }
                for _ in &node.aggregates {
                    for _ in 0..2 {
                        if counter + 1 == target_cost {
                            return Err(InjectError::IneligibleNode);
                        }
                        counter += 1;
                    }
                }
                for i in 0..=node.group_by.len() {
                    if counter + 1 == target_cost {
                        let name = fresh(words)?;
                        node.group_by.insert(i, name);
                        let marker = ErrorMarker {
                            kind,
                            role: ErrorRole::Group,
                            index: i,
                        };
                        node.error_marker = Some(marker);
                        return Ok(marker);
                    }
                    if i < node.group_by.len() {
                        counter += 1;
                    }
                }
            }
        }
    }

    Err(InjectError::OutOfRange)
}

/// Position of the injected item in the pipe-dialect cost walk.
///
/// Returns `None` when no marker is set or when the marked item does not
/// exist in the pipe rendering (an attribute marker inside an aggregating
/// level).
pub fn pipe_error_cost(chain: &QueryChain) -> Option<u32> {
    let mut counter = 0u32;

    for node in &chain.nodes {
        if !node.has_aggregates() {
            if let Some(marker) = node.error_marker {
                if marker.role == ErrorRole::Attribute {
                    return Some(counter + marker.index as u32 + 1);
                }
            }
            counter += node.attributes.len() as u32;
            continue;
        }

        if let Some(marker) = node.error_marker {
            match marker.role {
                ErrorRole::Aggregate => return Some(counter + 2 * marker.index as u32 + 1),
                ErrorRole::Group => {
                    return Some(
                        counter + 2 * node.aggregates.len() as u32 + marker.index as u32 + 1,
                    )
                }
                ErrorRole::Attribute => return None,
            }
        }

        counter += 2 * node.aggregates.len() as u32 + node.group_by.len() as u32;
    }

    None
}
