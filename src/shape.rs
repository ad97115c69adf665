//! Level shapes - triplet validity and candidate-sequence enumeration.
//!
//! A [`Triplet`] is the shape of one chain level: how many raw attributes,
//! aggregates and group-by columns it carries. The CTE structural cost of a
//! level is `attributes + 2 * aggregates + group_by`; sequence enumeration
//! splits a total cost budget across levels and keeps only shape sequences a
//! chain could actually realize.

use serde::{Deserialize, Serialize};

use crate::chain::AggFunc;
use crate::partition::{PartConstraint, Partitioner};

// =============================================================================
// Generator options
// =============================================================================

/// How aggregate aliases are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasStrategy {
    /// Pull a fresh word from the pool for every alias.
    #[default]
    FreshWord,
    /// Derive `<func>_<column>`, lowercased.
    DerivedName,
}

/// Scope of aggregate `(function, column)` de-duplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupScope {
    /// No pair repeats anywhere in the chain.
    #[default]
    Global,
    /// No pair repeats within one level.
    PerLevel,
}

/// Behavioral knobs of the chain generator.
///
/// The defaults reproduce the main-experiment generator; the alternatives
/// reproduce the preliminary-experiment variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenOptions {
    pub alias_strategy: AliasStrategy,
    pub dedup_scope: DedupScope,
    /// Whether group-by key columns are excluded from aggregate candidates.
    pub exclude_group_keys: bool,
    /// Keep only shape sequences whose aggregate counts sum to this value.
    pub total_aggregates: Option<u32>,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            alias_strategy: AliasStrategy::default(),
            dedup_scope: DedupScope::default(),
            exclude_group_keys: true,
            total_aggregates: None,
        }
    }
}

// =============================================================================
// Triplets
// =============================================================================

/// Shape of one chain level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub attributes: u32,
    pub aggregates: u32,
    pub group_by: u32,
}

impl Triplet {
    pub fn new(attributes: u32, aggregates: u32, group_by: u32) -> Self {
        Self {
            attributes,
            aggregates,
            group_by,
        }
    }

    /// CTE structural cost of this level.
    pub fn cost(&self) -> u32 {
        self.attributes + 2 * self.aggregates + self.group_by
    }

    /// Structural legality of a single level:
    ///
    /// - a level must project something (attributes or aggregates);
    /// - raw attributes next to aggregates require a GROUP BY;
    /// - grouped attributes must all be group keys (`group_by >= attributes`);
    /// - a GROUP BY without aggregates is pointless.
    pub fn is_valid(&self) -> bool {
        if self.attributes + self.aggregates == 0 {
            return false;
        }
        if self.aggregates > 0 && self.group_by == 0 && self.attributes > 0 {
            return false;
        }
        if self.aggregates > 0 && self.attributes > 0 && self.group_by < self.attributes {
            return false;
        }
        if self.group_by > 0 && self.aggregates == 0 {
            return false;
        }
        true
    }
}

/// Check a whole shape sequence against the running available-columns budget.
///
/// `available` starts at the base column count and becomes
/// `attributes + aggregates` after each level. The aggregate-capacity bound
/// uses the same candidate-column policy as the builder: with
/// `exclude_group_keys`, group keys cannot feed aggregates.
pub fn is_valid_sequence(sequence: &[Triplet], base_columns: u32, opts: &GenOptions) -> bool {
    let mut available = base_columns;

    for t in sequence {
        if t.attributes > available || t.group_by > available {
            return false;
        }

        let pool = if opts.exclude_group_keys {
            available - t.group_by
        } else {
            available
        };
        if t.aggregates > 0 && pool == 0 {
            return false;
        }
        if t.aggregates > pool * AggFunc::ALL.len() as u32 {
            return false;
        }

        available = t.attributes + t.aggregates;
        if available == 0 {
            return false;
        }
    }

    true
}

/// All legal triplets whose CTE cost equals `level_cost`.
fn triplets_of_cost(level_cost: u32) -> Vec<Triplet> {
    let mut result = Vec::new();
    for att in 0..=level_cost {
        for agg in 0..=(level_cost - att) / 2 {
            let group = level_cost - att - 2 * agg;
            let t = Triplet::new(att, agg, group);
            if t.is_valid() {
                result.push(t);
            }
        }
    }
    result
}

/// Precompute every realizable shape sequence for a batch run.
///
/// Splits `total_cost - base_columns` across `levels` (each level costing
/// more than 1), expands each split into per-level legal triplets, takes the
/// cartesian product and keeps the sequences that survive the running
/// budget plus the optional total-aggregates filter.
pub fn valid_triplet_sequences(
    partitioner: &mut Partitioner,
    levels: usize,
    total_cost: u32,
    base_columns: u32,
    opts: &GenOptions,
) -> Vec<Vec<Triplet>> {
    let Some(remaining) = total_cost.checked_sub(base_columns).filter(|r| *r > 0) else {
        return Vec::new();
    };

    let cost_splits = partitioner
        .partitions_of_length(remaining, levels, PartConstraint::GreaterThan(1))
        .to_vec();

    let mut sequences = Vec::new();

    'split: for split in cost_splits {
        let mut per_level = Vec::with_capacity(levels);
        for &level_cost in &split {
            let options = triplets_of_cost(level_cost);
            if options.is_empty() {
                continue 'split;
            }
            per_level.push(options);
        }

        let mut current = Vec::with_capacity(levels);
        collect_products(&per_level, &mut current, &mut |sequence| {
            if let Some(target) = opts.total_aggregates {
                let agg_sum: u32 = sequence.iter().map(|t| t.aggregates).sum();
                if agg_sum != target {
                    return;
                }
            }
            if is_valid_sequence(sequence, base_columns, opts) {
                sequences.push(sequence.to_vec());
            }
        });
    }

    sequences
}

fn collect_products(
    per_level: &[Vec<Triplet>],
    current: &mut Vec<Triplet>,
    emit: &mut impl FnMut(&[Triplet]),
) {
    if current.len() == per_level.len() {
        emit(current);
        return;
    }
    for &t in &per_level[current.len()] {
        current.push(t);
        collect_products(per_level, current, emit);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triplet_boundary_table() {
        // (att, agg, group) -> expected validity
        let table: &[((u32, u32, u32), bool)] = &[
            ((0, 0, 0), false), // projects nothing
            ((3, 0, 0), true),  // plain projection
            ((0, 2, 0), true),  // bare aggregation
            ((2, 1, 0), false), // attributes next to aggregates need GROUP BY
            ((2, 1, 1), false), // group keys must cover attributes
            ((2, 1, 2), true),
            ((2, 1, 3), true),
            ((0, 0, 2), false), // GROUP BY without aggregates
            ((0, 3, 2), true),
            ((1, 0, 1), false),
        ];
        for &((att, agg, group), expected) in table {
            assert_eq!(
                Triplet::new(att, agg, group).is_valid(),
                expected,
                "triplet ({att},{agg},{group})"
            );
        }
    }

    #[test]
    fn test_sequence_budget_attributes_bounded() {
        let opts = GenOptions::default();
        // Base exposes 3 columns; a level cannot project 4.
        let seq = [Triplet::new(4, 0, 0)];
        assert!(!is_valid_sequence(&seq, 3, &opts));
        assert!(is_valid_sequence(&[Triplet::new(3, 0, 0)], 3, &opts));
    }

    #[test]
    fn test_sequence_budget_shrinks_between_levels() {
        let opts = GenOptions::default();
        // First level narrows to 1 column, second cannot take 2.
        let seq = [Triplet::new(1, 0, 0), Triplet::new(2, 0, 0)];
        assert!(!is_valid_sequence(&seq, 5, &opts));
    }

    #[test]
    fn test_sequence_rejects_aggregate_without_pool() {
        let opts = GenOptions::default();
        // All available columns are group keys, nothing left to aggregate.
        let seq = [Triplet::new(0, 1, 2)];
        assert!(!is_valid_sequence(&seq, 2, &opts));

        let inclusive = GenOptions {
            exclude_group_keys: false,
            ..GenOptions::default()
        };
        assert!(is_valid_sequence(&seq, 2, &inclusive));
    }

    #[test]
    fn test_sequence_rejects_zero_width_level() {
        let opts = GenOptions::default();
        // A level exposing no columns would starve the rest of the chain.
        // (0,0,0) is already invalid per-triplet, but the budget rule also
        // catches it.
        let seq = [Triplet::new(0, 0, 0)];
        assert!(!is_valid_sequence(&seq, 5, &opts));
    }

    #[test]
    fn test_triplets_of_cost_respect_cost_and_validity() {
        for cost in 2..=8 {
            for t in triplets_of_cost(cost) {
                assert_eq!(t.cost(), cost);
                assert!(t.is_valid());
            }
        }
    }

    #[test]
    fn test_precompute_sequences_sum_to_budget() {
        let mut partitioner = Partitioner::new();
        let opts = GenOptions::default();
        let sequences = valid_triplet_sequences(&mut partitioner, 2, 13, 5, &opts);
        assert!(!sequences.is_empty());
        for seq in &sequences {
            assert_eq!(seq.len(), 2);
            let cost: u32 = seq.iter().map(Triplet::cost).sum();
            assert_eq!(cost, 8);
            assert!(is_valid_sequence(seq, 5, &opts));
        }
    }

    #[test]
    fn test_total_aggregates_filter() {
        let mut partitioner = Partitioner::new();
        let opts = GenOptions {
            total_aggregates: Some(2),
            ..GenOptions::default()
        };
        let sequences = valid_triplet_sequences(&mut partitioner, 2, 14, 5, &opts);
        for seq in &sequences {
            let aggs: u32 = seq.iter().map(|t| t.aggregates).sum();
            assert_eq!(aggs, 2);
        }
    }

    #[test]
    fn test_budget_below_base_yields_nothing() {
        let mut partitioner = Partitioner::new();
        let opts = GenOptions::default();
        assert!(valid_triplet_sequences(&mut partitioner, 2, 5, 5, &opts).is_empty());
        assert!(valid_triplet_sequences(&mut partitioner, 2, 3, 5, &opts).is_empty());
    }
}
