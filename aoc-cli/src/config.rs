//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
/// Fallback input directory
pub const DEFAULT_INPUT_DIR: &str = "~/.cache/aoc_solver/inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs and expected answers
    pub input_dir: PathBuf,
    /// Read sample inputs instead of the real ones
    pub sample: bool,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let env_dir = std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from);
        Self::from_args_with_env(args, env_dir)
    }

    fn from_args_with_env(args: Args, env_dir: Option<PathBuf>) -> Self {
        let input_dir = resolve_input_dir(args.input_dir, env_dir);
        let thread_count = args.threads.unwrap_or_else(num_cpus);

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            sample: args.sample,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        }
    }
}

/// `--input-dir`, then the environment, then the default; `~` expanded
fn resolve_input_dir(arg: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    let dir = arg
        .or(env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_input_dir_precedence() {
        let arg = Some(PathBuf::from("/from/arg"));
        let env = Some(PathBuf::from("/from/env"));

        assert_eq!(
            resolve_input_dir(arg.clone(), env.clone()),
            PathBuf::from("/from/arg")
        );
        assert_eq!(resolve_input_dir(None, env), PathBuf::from("/from/env"));
        assert!(resolve_input_dir(None, None).ends_with(".cache/aoc_solver/inputs"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(
            expand_tilde(Path::new("/abs/path")),
            PathBuf::from("/abs/path")
        );
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "aoc",
            "--year",
            "2023",
            "--threads",
            "3",
            "--input-dir",
            "/data",
            "--quiet",
        ])
        .unwrap();
        let config = Config::from_args_with_env(args, Some(PathBuf::from("/ignored")));

        assert_eq!(config.year_filter, Some(2023));
        assert_eq!(config.day_filter, None);
        assert_eq!(config.thread_count, 3);
        assert_eq!(config.input_dir, PathBuf::from("/data"));
        assert!(config.quiet);
        assert!(!config.sample);
    }
}
