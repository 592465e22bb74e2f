//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::{ExpectedAnswers, InputStore};
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// How a computed answer compares with the recorded one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No expected answer on record
    Unknown,
    Matches,
    Differs,
}

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Expected answer from the answers file, if any
    pub expected: Option<String>,
    pub solve_duration: TimeDelta,
    pub parse_duration: Option<TimeDelta>,
}

impl SolverResult {
    /// Compare the answer with the expected one. Failed parts are `Unknown`.
    pub fn verdict(&self) -> Verdict {
        match (&self.answer, &self.expected) {
            (Ok(answer), Some(expected)) if answer == expected => Verdict::Matches,
            (Ok(_), Some(_)) => Verdict::Differs,
            _ => Verdict::Unknown,
        }
    }
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

impl WorkItem {
    /// Number of results this item will produce
    pub fn part_count(&self) -> usize {
        self.parts.clone().count()
    }
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// State shared read-only by every worker thread
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                store: InputStore::new(config.input_dir.clone(), config.sample),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn store(&self) -> &InputStore {
        &self.sync_executor_config.store
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits each item across parts in run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map_with(tx.clone(), |tx, work| run_work_item(&work, tx, cfg).err())
                .reduce(|| None, merge_errors)
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map_with(tx.clone(), |tx, items| {
                    items
                        .iter()
                        .map(|work| run_work_item(work, tx, cfg).err())
                        .fold(None, merge_errors)
                })
                .reduce(|| None, merge_errors)
                .map_or(Ok(()), Err)
        })
    }
}

#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn merge_errors(
    first: Option<ArcExecutorError>,
    second: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (first, second) {
        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
        (a, b) => a.or(b),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Result for a part that never reached its solver
fn make_error_result(work: &WorkItem, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        expected: None,
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

/// Read input and answers for one year/day and run its parts
///
/// Failures of a single puzzle become error results; only channel
/// failures are returned.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let loaded = cfg.store.read_input(year, day).and_then(|input| {
        let answers = cfg.store.expected_answers(year, day)?;
        Ok((input, answers))
    });

    let (input, answers) = match loaded {
        Ok(loaded) => loaded,
        Err(source) => {
            let error: ArcExecutorError = ExecutorError::Input { year, day, source }.into();
            for part in work.parts.clone() {
                send(tx, make_error_result(work, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, &answers, tx, cfg)
    } else {
        run_parts_sequential(work, &input, &answers, tx, cfg)
    }
}

/// Solve each part on its own solver instance in parallel, emitting in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    answers: &ExpectedAnswers,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match cfg.registry.create_solver(work.year, work.day, input) {
            Ok(mut solver) => solve_part(work, part, &mut *solver, answers),
            Err(e) => make_error_result(work, part, ExecutorError::from(e).into()),
        })
        .collect();
    results.sort_by_key(|r| r.part);

    results.into_iter().try_for_each(|r| send(tx, r))
}

/// Parse once and solve the parts in order on the same instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    answers: &ExpectedAnswers,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let mut solver = match cfg.registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error: ArcExecutorError = ExecutorError::from(e).into();
            for part in work.parts.clone() {
                send(tx, make_error_result(work, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        send(tx, solve_part(work, part, &mut *solver, answers))?;
    }
    Ok(())
}

fn solve_part(
    work: &WorkItem,
    part: u8,
    solver: &mut dyn DynSolver,
    answers: &ExpectedAnswers,
) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    let expected = answers.get(part).map(str::to_string);

    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year: work.year,
            day: work.day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            expected,
            parse_duration,
        },
        Err(e) => SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(ExecutorError::Solver(e.into()).into()),
            expected,
            solve_duration: TimeDelta::zero(),
            parse_duration,
        },
    }
}
