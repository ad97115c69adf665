//! Chain construction - realize a validated shape sequence as a
//! [`QueryChain`] with concrete identifiers.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

use super::{AggFunc, Aggregate, QueryChain, QueryNode};
use crate::shape::{AliasStrategy, DedupScope, GenOptions, Triplet};
use crate::words::WordPool;

/// Why a build attempt was abandoned.
///
/// Both variants are expected generation failures: the caller discards the
/// attempt and retries with a different shape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("word pool exhausted while naming columns")]
    WordsExhausted,
    #[error("no unused (function, column) aggregate candidate left")]
    NoAggregateCandidate,
}

/// Build a chain from a shape sequence.
///
/// The base level projects `base_columns` fresh words. Each level takes its
/// attributes and group keys positionally from the columns the previous
/// level exposes, then fills its aggregates from the candidate pairs the
/// de-duplication scope still allows. No partial chain is ever returned.
pub fn build_chain<R: Rng + ?Sized>(
    sequence: &[Triplet],
    base_columns: u32,
    words: &mut WordPool,
    rng: &mut R,
    opts: &GenOptions,
) -> Result<QueryChain, BuildError> {
    let base = words.pull(base_columns as usize);
    if base.len() < base_columns as usize {
        return Err(BuildError::WordsExhausted);
    }

    let mut chain = QueryChain::with_base(base);
    let mut exposed = chain.base().exposed_columns();
    let mut used_combos: HashSet<(AggFunc, String)> = HashSet::new();

    for triplet in sequence {
        let mut node = QueryNode {
            attributes: exposed
                .iter()
                .take(triplet.attributes as usize)
                .cloned()
                .collect(),
            group_by: exposed
                .iter()
                .take(triplet.group_by as usize)
                .cloned()
                .collect(),
            ..Default::default()
        };

        if triplet.aggregates > 0 {
            let group_keys: HashSet<&String> = node.group_by.iter().collect();
            let candidates_from: Vec<String> = if opts.exclude_group_keys {
                exposed
                    .iter()
                    .filter(|c| !group_keys.contains(c))
                    .cloned()
                    .collect()
            } else {
                exposed.clone()
            };
            if candidates_from.is_empty() {
                return Err(BuildError::NoAggregateCandidate);
            }

            let mut level_combos: HashSet<(AggFunc, String)> = HashSet::new();

            for _ in 0..triplet.aggregates {
                let candidates: Vec<(AggFunc, &String)> = candidates_from
                    .iter()
                    .flat_map(|col| AggFunc::ALL.iter().map(move |f| (*f, col)))
                    .filter(|(f, col)| {
                        let key = (*f, (*col).clone());
                        match opts.dedup_scope {
                            DedupScope::Global => !used_combos.contains(&key),
                            DedupScope::PerLevel => !level_combos.contains(&key),
                        }
                    })
                    .collect();

                let Some((func, column)) = candidates.choose(rng).copied() else {
                    return Err(BuildError::NoAggregateCandidate);
                };
                let key = (func, column.clone());
                used_combos.insert(key.clone());
                level_combos.insert(key);

                let alias = match opts.alias_strategy {
                    AliasStrategy::FreshWord => {
                        let mut pulled = words.pull(1);
                        pulled.pop().ok_or(BuildError::WordsExhausted)?
                    }
                    AliasStrategy::DerivedName => {
                        format!("{}_{}", func.lowercase(), column)
                    }
                };

                node.aggregates.push(Aggregate {
                    func,
                    column: column.clone(),
                    alias,
                });
            }
        }

        exposed = node.exposed_columns();
        chain.push_level(node);
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(
        sequence: &[Triplet],
        seed: u64,
        opts: &GenOptions,
    ) -> Result<QueryChain, BuildError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut words = WordPool::new(&mut rng);
        build_chain(sequence, 5, &mut words, &mut rng, opts)
    }

    #[test]
    fn test_projection_takes_positional_prefix() {
        let opts = GenOptions::default();
        let chain = build(&[Triplet::new(3, 0, 0)], 7, &opts).unwrap();
        let base_cols = chain.base().attributes.clone();
        assert_eq!(chain.nodes[1].attributes, base_cols[..3].to_vec());
        assert!(chain.nodes[1].aggregates.is_empty());
    }

    #[test]
    fn test_aggregate_combos_unique_globally() {
        let opts = GenOptions::default();
        let sequence = [Triplet::new(0, 3, 2), Triplet::new(0, 2, 1)];
        let chain = build(&sequence, 11, &opts).unwrap();

        let mut combos = HashSet::new();
        for node in &chain.nodes {
            for agg in &node.aggregates {
                assert!(
                    combos.insert((agg.func, agg.column.clone())),
                    "duplicate combo {:?}({})",
                    agg.func,
                    agg.column
                );
            }
        }
    }

    #[test]
    fn test_group_keys_not_aggregated_when_excluded() {
        let opts = GenOptions::default();
        let chain = build(&[Triplet::new(2, 1, 2)], 13, &opts).unwrap();
        let node = &chain.nodes[1];
        for agg in &node.aggregates {
            assert!(!node.group_by.contains(&agg.column));
        }
    }

    #[test]
    fn test_derived_alias_naming() {
        let opts = GenOptions {
            alias_strategy: AliasStrategy::DerivedName,
            ..GenOptions::default()
        };
        let chain = build(&[Triplet::new(0, 2, 1)], 17, &opts).unwrap();
        for agg in &chain.nodes[1].aggregates {
            assert_eq!(agg.alias, format!("{}_{}", agg.func.lowercase(), agg.column));
        }
    }

    #[test]
    fn test_candidate_exhaustion_fails_cleanly() {
        let opts = GenOptions::default();
        // One aggregatable column supports at most 5 distinct combos.
        let sequence = [Triplet::new(0, 6, 4)];
        assert_eq!(
            build(&sequence, 19, &opts),
            Err(BuildError::NoAggregateCandidate)
        );
    }

    #[test]
    fn test_seeded_builds_reproduce() {
        let opts = GenOptions::default();
        let sequence = [Triplet::new(2, 1, 2), Triplet::new(0, 2, 1)];
        let a = build(&sequence, 23, &opts).unwrap();
        let b = build(&sequence, 23, &opts).unwrap();
        assert_eq!(a, b);
    }
}
