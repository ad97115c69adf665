//! Batch orchestration.
//!
//! Drives the full pipeline for every `(error kind, diff target)`
//! combination a [`Settings`] asks for: pick a shape sequence, build a
//! chain, optionally inject an error, check the cost accounting, render
//! both dialects and emit a [`ResultRow`]. Attempts that miss a target are
//! discarded and retried up to the configured cap; a combination that runs
//! out of attempts is reported as a shortfall rather than an error.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::chain::{ErrorKind, QueryChain};
use crate::chain::builder::{build_chain, BuildError};
use crate::config::{ErrorSetting, Settings, SettingsError};
use crate::inject::{inject_error, pipe_error_cost, InjectError};
use crate::partition::Partitioner;
use crate::shape::{valid_triplet_sequences, Triplet};
use crate::sql::{locate_identifier, render_cte, render_pipe};
use crate::words::WordPool;

/// Error type for batch runs.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("no shape sequence realizes cost {total_cost} over {levels} level(s)")]
    NoShapes { levels: usize, total_cost: u32 },
}

/// Why one shape sequence was discarded within a try.
///
/// Never surfaces past the sequence scan; kept as a type so the scan stays
/// exhaustive when new rejection reasons appear.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error("chain cost {got} does not match the requested {want}")]
    CostMismatch { want: u32, got: u32 },

    #[error("information difference {got} does not match the requested {want}")]
    DiffMismatch { want: i64, got: i64 },

    #[error("injected identifier not locatable in rendered output")]
    ErrorLineNotFound,
}

/// One accepted stimulus pair.
///
/// Field names follow the experiment runner's historical JSON schema; all
/// `Option` fields serialize as `null` for control rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "sqlQuery")]
    pub sql_query: String,
    #[serde(rename = "pipeQuery")]
    pub pipe_query: String,
    #[serde(rename = "totalInformationSQL")]
    pub total_information_sql: u32,
    #[serde(rename = "totalInformationPipe")]
    pub total_information_pipe: u32,
    #[serde(rename = "totalInformationUntilErrorSQL")]
    pub total_information_until_error_sql: Option<u32>,
    #[serde(rename = "totalInformationUntilErrorPipe")]
    pub total_information_until_error_pipe: Option<u32>,
    #[serde(rename = "errorType")]
    pub error_type: Option<ErrorKind>,
    #[serde(rename = "totalInformationDifference")]
    pub total_information_difference: i64,
    #[serde(rename = "unknownName")]
    pub unknown_name: Option<String>,
    #[serde(rename = "numberQueries_excludingBase")]
    pub number_queries_excluding_base: usize,
    #[serde(rename = "columnsBaseQuery")]
    pub columns_base_query: u32,
    #[serde(rename = "errorLineSQL")]
    pub error_line_sql: Option<usize>,
    #[serde(rename = "errorLinePipe")]
    pub error_line_pipe: Option<usize>,
}

/// Outcome of one `(error kind, diff target)` combination.
#[derive(Debug, Clone, Serialize)]
pub struct ComboReport {
    pub error_kind: ErrorSetting,
    pub diff_target: i64,
    pub requested: usize,
    pub produced: usize,
    pub tries: usize,
}

impl ComboReport {
    pub fn is_short(&self) -> bool {
        self.produced < self.requested
    }
}

/// All rows plus the per-combination accounting of a run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub rows: Vec<ResultRow>,
    pub reports: Vec<ComboReport>,
}

impl BatchOutcome {
    pub fn shortfalls(&self) -> impl Iterator<Item = &ComboReport> {
        self.reports.iter().filter(|r| r.is_short())
    }
}

/// Run the generator for every combination in `settings`.
pub fn run_batch(settings: &Settings) -> Result<BatchOutcome, BatchError> {
    settings.validate()?;

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut partitioner = Partitioner::new();
    let sequences = valid_triplet_sequences(
        &mut partitioner,
        settings.levels,
        settings.total_cost,
        settings.base_columns,
        &settings.generator,
    );
    if sequences.is_empty() {
        return Err(BatchError::NoShapes {
            levels: settings.levels,
            total_cost: settings.total_cost,
        });
    }

    let mut words = WordPool::new(&mut rng);
    let mut rows = Vec::new();
    let mut reports = Vec::new();

    for setting in &settings.error_kinds {
        for &diff_target in &settings.diffs {
            let mut produced = 0;
            let mut tries = 0;

            while produced < settings.repetitions && tries < settings.tries_limit {
                tries += 1;
                match attempt(settings, &sequences, setting.kind(), diff_target, &mut words, &mut rng)
                {
                    Some(row) => {
                        rows.push(row);
                        produced += 1;
                    }
                    None => continue,
                }
            }

            reports.push(ComboReport {
                error_kind: *setting,
                diff_target,
                requested: settings.repetitions,
                produced,
                tries,
            });
        }
    }

    Ok(BatchOutcome { rows, reports })
}

/// One try: scan every precomputed sequence in random order with a fresh
/// word pool per sequence, accepting the first chain that meets every
/// target. A try fails only when no sequence is accepted.
fn attempt(
    settings: &Settings,
    sequences: &[Vec<Triplet>],
    kind: Option<ErrorKind>,
    diff_target: i64,
    words: &mut WordPool,
    rng: &mut StdRng,
) -> Option<ResultRow> {
    let mut order: Vec<usize> = (0..sequences.len()).collect();
    order.shuffle(rng);

    for idx in order {
        words.reset(rng);
        match try_sequence(settings, &sequences[idx], kind, diff_target, words, rng) {
            Ok(row) => return Some(row),
            Err(_) => continue,
        }
    }
    None
}

/// Drive one shape sequence through build, injection, acceptance checks
/// and rendering.
fn try_sequence(
    settings: &Settings,
    sequence: &[Triplet],
    kind: Option<ErrorKind>,
    diff_target: i64,
    words: &mut WordPool,
    rng: &mut StdRng,
) -> Result<ResultRow, AttemptError> {
    let chain = build_chain(sequence, settings.base_columns, words, rng, &settings.generator)?;

    let built_cost = chain.cost_cte();
    if built_cost != settings.total_cost {
        return Err(AttemptError::CostMismatch {
            want: settings.total_cost,
            got: built_cost,
        });
    }

    match kind {
        Some(kind) => finish_error_row(settings, chain, kind, diff_target, words, rng),
        None => finish_control_row(settings, chain, diff_target),
    }
}

fn finish_error_row(
    settings: &Settings,
    mut chain: QueryChain,
    kind: ErrorKind,
    diff_target: i64,
    words: &mut WordPool,
    rng: &mut StdRng,
) -> Result<ResultRow, AttemptError> {
    inject_error(&mut chain, kind, settings.error_cost, words, rng)?;

    // The inserted item must account for exactly its own weight.
    let expected = settings.total_cost + kind.injected_weight();
    let got = chain.cost_cte();
    if got != expected {
        return Err(AttemptError::CostMismatch {
            want: expected,
            got,
        });
    }

    let until_error_pipe = pipe_error_cost(&chain).ok_or(AttemptError::ErrorLineNotFound)?;
    let diff = (i64::from(settings.error_cost) - i64::from(until_error_pipe)).abs();
    if diff != diff_target {
        return Err(AttemptError::DiffMismatch {
            want: diff_target,
            got: diff,
        });
    }

    let unknown = chain
        .unknown_name()
        .map(str::to_string)
        .ok_or(AttemptError::ErrorLineNotFound)?;

    let sql_query = render_cte(&chain);
    let pipe_query = render_pipe(&chain);
    let error_line_sql =
        locate_identifier(&sql_query, &unknown).ok_or(AttemptError::ErrorLineNotFound)?;
    let error_line_pipe =
        locate_identifier(&pipe_query, &unknown).ok_or(AttemptError::ErrorLineNotFound)?;

    Ok(ResultRow {
        sql_query,
        pipe_query,
        total_information_sql: got,
        total_information_pipe: chain.cost_pipe(),
        total_information_until_error_sql: Some(settings.error_cost),
        total_information_until_error_pipe: Some(until_error_pipe),
        error_type: Some(kind),
        total_information_difference: diff,
        unknown_name: Some(unknown),
        number_queries_excluding_base: chain.levels_excluding_base(),
        columns_base_query: settings.base_columns,
        error_line_sql: Some(error_line_sql),
        error_line_pipe: Some(error_line_pipe),
    })
}

fn finish_control_row(
    settings: &Settings,
    chain: QueryChain,
    diff_target: i64,
) -> Result<ResultRow, AttemptError> {
    let total_cte = chain.cost_cte();
    let total_pipe = chain.cost_pipe();
    let diff = i64::from(total_cte) - i64::from(total_pipe);
    if diff != diff_target {
        return Err(AttemptError::DiffMismatch {
            want: diff_target,
            got: diff,
        });
    }

    Ok(ResultRow {
        sql_query: render_cte(&chain),
        pipe_query: render_pipe(&chain),
        total_information_sql: total_cte,
        total_information_pipe: total_pipe,
        total_information_until_error_sql: None,
        total_information_until_error_pipe: None,
        error_type: None,
        total_information_difference: diff,
        unknown_name: None,
        number_queries_excluding_base: chain.levels_excluding_base(),
        columns_base_query: settings.base_columns,
        error_line_sql: None,
        error_line_pipe: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One pure-projection level of cost 3 over a 5-column base. Every
    /// realizable shape gives the same pipe cost, so the control diff is
    /// always 0.
    fn small_settings() -> Settings {
        Settings {
            levels: 1,
            total_cost: 8,
            error_cost: 6,
            diffs: vec![0],
            error_kinds: vec![ErrorSetting::None],
            repetitions: 2,
            tries_limit: 50,
            base_columns: 5,
            seed: Some(7),
            ..Settings::default()
        }
    }

    #[test]
    fn test_control_rows_have_null_error_fields() {
        let outcome = run_batch(&small_settings()).unwrap();
        assert_eq!(outcome.rows.len(), 2);
        for row in &outcome.rows {
            assert_eq!(row.error_type, None);
            assert_eq!(row.unknown_name, None);
            assert_eq!(row.error_line_sql, None);
            assert_eq!(row.error_line_pipe, None);
            assert_eq!(row.total_information_sql, 8);
            assert_eq!(row.total_information_difference, 0);
            assert_eq!(row.number_queries_excluding_base, 1);
        }
        assert_eq!(outcome.shortfalls().count(), 0);
    }

    #[test]
    fn test_error_rows_carry_location_fields() {
        // error_cost 6 always lands at the end of the 5-column base, which
        // is a pure projection, so attribute injection never misses.
        let settings = Settings {
            error_kinds: vec![ErrorSetting::AttributeUnknown],
            ..small_settings()
        };
        let outcome = run_batch(&settings).unwrap();
        assert_eq!(outcome.rows.len(), 2);
        for row in &outcome.rows {
            assert_eq!(row.error_type, Some(ErrorKind::AttributeUnknown));
            assert_eq!(row.total_information_sql, 9);
            assert_eq!(row.total_information_until_error_sql, Some(6));
            assert_eq!(row.total_information_until_error_pipe, Some(6));
            assert_eq!(row.total_information_difference, 0);
            let unknown = row.unknown_name.as_deref().unwrap();
            assert!(row.sql_query.contains(unknown));
            assert!(row.pipe_query.contains(unknown));
            assert!(row.error_line_sql.is_some());
            assert!(row.error_line_pipe.is_some());
        }
    }

    #[test]
    fn test_try_scans_every_sequence_for_the_diff_target() {
        // cost 10 over one level leaves four realizable shapes; only
        // (1,1,2) renders cheaper in the pipe dialect, so diff 1 is reached
        // by exactly one shape. A try scans all of them, so it can never
        // miss, and the quota fills with tries == repetitions.
        for seed in 0..20 {
            let settings = Settings {
                total_cost: 10,
                diffs: vec![1],
                repetitions: 3,
                tries_limit: 3,
                seed: Some(seed),
                ..small_settings()
            };
            let outcome = run_batch(&settings).unwrap();
            assert_eq!(outcome.rows.len(), 3, "seed {seed} fell short");
            assert_eq!(outcome.reports[0].tries, 3);
            for row in &outcome.rows {
                assert_eq!(row.total_information_sql, 10);
                assert_eq!(row.total_information_pipe, 9);
                assert_eq!(row.total_information_difference, 1);
            }
        }
    }

    #[test]
    fn test_shortfall_is_reported_not_fatal() {
        let settings = Settings {
            diffs: vec![999],
            tries_limit: 5,
            ..small_settings()
        };
        let outcome = run_batch(&settings).unwrap();
        assert!(outcome.rows.is_empty());
        let report = &outcome.reports[0];
        assert_eq!(report.produced, 0);
        assert_eq!(report.tries, 5);
        assert!(report.is_short());
    }

    #[test]
    fn test_infeasible_shape_budget_is_an_error() {
        let settings = Settings {
            // remaining budget of 1 cannot fill a level costing more than 1
            total_cost: 6,
            ..small_settings()
        };
        assert!(matches!(
            run_batch(&settings),
            Err(BatchError::NoShapes { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_rows() {
        let a = run_batch(&small_settings()).unwrap();
        let b = run_batch(&small_settings()).unwrap();
        let texts_a: Vec<_> = a.rows.iter().map(|r| &r.sql_query).collect();
        let texts_b: Vec<_> = b.rows.iter().map(|r| &r.sql_query).collect();
        assert_eq!(texts_a, texts_b);
    }

    #[test]
    fn test_row_serializes_with_runner_field_names() {
        let outcome = run_batch(&small_settings()).unwrap();
        let value = serde_json::to_value(&outcome.rows[0]).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "sqlQuery",
            "pipeQuery",
            "totalInformationSQL",
            "totalInformationPipe",
            "totalInformationUntilErrorSQL",
            "totalInformationUntilErrorPipe",
            "errorType",
            "totalInformationDifference",
            "unknownName",
            "numberQueries_excludingBase",
            "columnsBaseQuery",
            "errorLineSQL",
            "errorLinePipe",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert!(obj["errorType"].is_null());
    }
}
