//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some answers were wrong or could not be computed
    #[error("{failed} part(s) failed, {mismatched} answer(s) did not match the expected value")]
    Verification { failed: usize, mismatched: usize },

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Puzzle input could not be read
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver creation or execution failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.iter().map(ArcExecutorError::count).sum::<usize>())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening either side if it
    /// is already a `Multiple`. Order is preserved: `first` before `second`.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(head), ExecutorError::Multiple(tail)) => {
                head.iter().chain(tail).cloned().collect()
            }
            (_, ExecutorError::Multiple(tail)) => {
                std::iter::once(first.clone()).chain(tail.iter().cloned()).collect()
            }
            (ExecutorError::Multiple(head), _) => {
                head.iter().cloned().chain(std::iter::once(second.clone())).collect()
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Number of leaf errors
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(errors) => errors.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

/// Errors reading puzzle inputs and expected answers
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    /// File exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(code: &str) -> ArcExecutorError {
        ExecutorError::ThreadPool(code.to_string()).into()
    }

    fn labels(err: &ArcExecutorError) -> Vec<String> {
        match err.inner() {
            ExecutorError::Multiple(errors) => errors.iter().flat_map(labels).collect(),
            other => vec![other.to_string()],
        }
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(leaf("a"), leaf("b"));
        assert_eq!(combined.count(), 2);
        assert_eq!(
            labels(&combined),
            vec![
                "Thread pool creation failed: a",
                "Thread pool creation failed: b"
            ]
        );
    }

    #[test]
    fn test_combine_flattens_and_keeps_order() {
        let left = ArcExecutorError::combine(leaf("a"), leaf("b"));
        let right = ArcExecutorError::combine(leaf("c"), leaf("d"));

        let all = ArcExecutorError::combine(left.clone(), right.clone());
        assert!(matches!(all.inner(), ExecutorError::Multiple(v) if v.len() == 4));

        let prepended = ArcExecutorError::combine(leaf("z"), right);
        assert!(labels(&prepended)[0].ends_with('z'));

        let appended = ArcExecutorError::combine(left, leaf("z"));
        assert!(labels(&appended)[2].ends_with('z'));
    }

    #[test]
    fn test_combine_opt() {
        assert_eq!(ArcExecutorError::combine_opt(None, leaf("a")).count(), 1);
        assert_eq!(
            ArcExecutorError::combine_opt(Some(leaf("a")), leaf("b")).count(),
            2
        );
    }

    #[test]
    fn test_input_error_display() {
        let err = ExecutorError::Input {
            year: 2023,
            day: 5,
            source: InputError::Missing(PathBuf::from("/in/2023_day05.txt")),
        };
        assert_eq!(
            err.to_string(),
            "Input unavailable for 2023/05: no input file at /in/2023_day05.txt"
        );
    }
}
