//! Word supply - distinct short identifier words for synthetic columns.
//!
//! A [`WordPool`] hands out words from a fixed list, never repeating a word
//! until [`WordPool::reset`] is called. Column names, aggregate aliases and
//! injected unknown identifiers all come from the same pool, so a single
//! chain never contains an ambiguous reference.
//!
//! The pool is shuffled with the caller's seeded RNG at construction, which
//! keeps word selection reproducible from the batch seed.

mod list;

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use list::WORDS;

/// A resettable pool of distinct identifier words.
///
/// `pull` and `pull_excluding` return *up to* the requested count; callers
/// must treat a short result as exhaustion and abandon the current
/// generation attempt rather than retry against the same pool.
#[derive(Debug, Clone)]
pub struct WordPool {
    available: Vec<String>,
    used: HashSet<String>,
}

impl WordPool {
    /// Create a full pool, shuffled with the given RNG.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut available: Vec<String> = WORDS.iter().map(|w| (*w).to_string()).collect();
        available.shuffle(rng);
        Self {
            available,
            used: HashSet::new(),
        }
    }

    /// Number of words still available.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// Pull up to `n` previously-unreturned words, marking them used.
    pub fn pull(&mut self, n: usize) -> Vec<String> {
        let mut result = Vec::with_capacity(n);
        for _ in 0..n {
            match self.available.pop() {
                Some(word) => {
                    self.used.insert(word.clone());
                    result.push(word);
                }
                None => break,
            }
        }
        result
    }

    /// Pull up to `n` words that are neither used nor in `forbidden`.
    ///
    /// Words skipped because they are forbidden go back into the pool and
    /// stay available for later calls.
    pub fn pull_excluding(&mut self, n: usize, forbidden: &HashSet<String>) -> Vec<String> {
        let mut result = Vec::with_capacity(n);
        let mut skipped = Vec::new();

        while result.len() < n {
            let Some(word) = self.available.pop() else {
                break;
            };
            if forbidden.contains(&word) {
                skipped.push(word);
            } else {
                self.used.insert(word.clone());
                result.push(word);
            }
        }

        self.available.append(&mut skipped);
        result
    }

    /// Restore the full pool, clear usage, and reshuffle.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.available = WORDS.iter().map(|w| (*w).to_string()).collect();
        self.available.shuffle(rng);
        self.used.clear();
    }

    /// Words handed out since construction or the last reset.
    pub fn used(&self) -> &HashSet<String> {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pull_returns_distinct_words() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = WordPool::new(&mut rng);
        let words = pool.pull(50);
        assert_eq!(words.len(), 50);
        let unique: HashSet<_> = words.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_pull_never_repeats_across_calls() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = WordPool::new(&mut rng);
        let first = pool.pull(10);
        let second = pool.pull(10);
        for w in &second {
            assert!(!first.contains(w));
        }
    }

    #[test]
    fn test_pull_excluding_keeps_forbidden_available() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = WordPool::new(&mut rng);

        // Forbid the next three words the pool would hand out.
        let peek: Vec<String> = pool.available.iter().rev().take(3).cloned().collect();
        let forbidden: HashSet<String> = peek.iter().cloned().collect();
        let before = pool.remaining();

        let pulled = pool.pull_excluding(5, &forbidden);
        assert_eq!(pulled.len(), 5);
        for w in &pulled {
            assert!(!forbidden.contains(w));
        }
        // Forbidden words went back into the pool.
        assert_eq!(pool.remaining(), before - 5);
        for w in &peek {
            assert!(pool.available.contains(w));
        }
    }

    #[test]
    fn test_exhaustion_returns_short() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = WordPool::new(&mut rng);
        let total = pool.remaining();
        let words = pool.pull(total + 10);
        assert_eq!(words.len(), total);
        assert!(pool.pull(1).is_empty());
    }

    #[test]
    fn test_reset_restores_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = WordPool::new(&mut rng);
        let total = pool.remaining();
        pool.pull(30);
        pool.reset(&mut rng);
        assert_eq!(pool.remaining(), total);
        assert!(pool.used().is_empty());
    }

    #[test]
    fn test_seeded_pools_agree() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let mut pool_a = WordPool::new(&mut rng_a);
        let mut pool_b = WordPool::new(&mut rng_b);
        assert_eq!(pool_a.pull(20), pool_b.pull(20));
    }
}
