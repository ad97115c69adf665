//! Constrained integer-partition enumeration.
//!
//! The shape layer asks the same partition questions over and over within a
//! run (every batch combination re-derives its candidate shapes), so the
//! enumerator memoizes results per instance. The cache key carries the
//! constraint as a value, never a closure, so identical queries always hit.

use std::collections::HashMap;

/// Per-part constraint for a partition query.
///
/// Carried by value so it can participate in the memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartConstraint {
    /// Any non-negative part.
    Any,
    /// Each part must be strictly greater than the bound.
    GreaterThan(u32),
}

impl PartConstraint {
    fn allows(&self, part: u32) -> bool {
        match self {
            PartConstraint::Any => true,
            PartConstraint::GreaterThan(bound) => part > *bound,
        }
    }
}

/// Memoizing enumerator of ordered integer partitions.
///
/// Owned by a single batch run; never shared process-wide.
#[derive(Debug, Default)]
pub struct Partitioner {
    cache: HashMap<(u32, usize, PartConstraint), Vec<Vec<u32>>>,
}

impl Partitioner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ordered sequence of `length` non-negative integers summing to
    /// `total`, with each part satisfying `constraint`.
    ///
    /// Output order is deterministic but unspecified; callers shuffle
    /// before consuming.
    pub fn partitions_of_length(
        &mut self,
        total: u32,
        length: usize,
        constraint: PartConstraint,
    ) -> &[Vec<u32>] {
        self.cache
            .entry((total, length, constraint))
            .or_insert_with(|| {
                let mut result = Vec::new();
                let mut parts = Vec::with_capacity(length);
                backtrack(total, length, constraint, &mut parts, &mut result);
                result
            })
    }

    /// Every ordered triple of non-negative integers summing to `total`.
    pub fn triplets_summing_to(&mut self, total: u32) -> &[Vec<u32>] {
        self.partitions_of_length(total, 3, PartConstraint::Any)
    }
}

fn backtrack(
    remaining: u32,
    slots: usize,
    constraint: PartConstraint,
    parts: &mut Vec<u32>,
    result: &mut Vec<Vec<u32>>,
) {
    if slots == 0 {
        if remaining == 0 {
            result.push(parts.clone());
        }
        return;
    }
    for part in 0..=remaining {
        if constraint.allows(part) {
            parts.push(part);
            backtrack(remaining - part, slots - 1, constraint, parts, result);
            parts.pop();
        }
    }
}
