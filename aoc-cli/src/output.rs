//! Output formatting for solver results

use crate::executor::{SolverResult, Verdict};
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing and verification against the expected answer
    fn print_full(&self, result: &SolverResult) {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match &result.answer {
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                let solve_timing = format_duration(result.solve_duration);

                println!(
                    "{}: {} ({}solve: {}){}",
                    prefix,
                    answer,
                    parse_timing,
                    solve_timing,
                    format_verdict(result)
                );
            }
            Err(e) => {
                eprintln!("{}: Error - {}", prefix, e);
            }
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;
        let mismatches = count_mismatches(results);

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        if results.iter().any(|r| r.expected.is_some()) {
            let matched = results
                .iter()
                .filter(|r| r.verdict() == Verdict::Matches)
                .count();
            println!("Answers: {} matched, {} mismatched", matched, mismatches);
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Number of answers that differ from the recorded ones
pub fn count_mismatches(results: &[SolverResult]) -> usize {
    results
        .iter()
        .filter(|r| r.verdict() == Verdict::Differs)
        .count()
}

/// Suffix describing how an answer compares with the recorded one
fn format_verdict(result: &SolverResult) -> String {
    match (result.verdict(), &result.expected) {
        (Verdict::Matches, _) => " ✓".to_string(),
        (Verdict::Differs, Some(expected)) => format!(" ✗ expected {}", expected),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(answer: &str, expected: Option<&str>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 5,
            part: 2,
            answer: Ok(answer.to_string()),
            expected: expected.map(str::to_string),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_format_verdict() {
        assert_eq!(format_verdict(&result("46", Some("46"))), " ✓");
        assert_eq!(format_verdict(&result("47", Some("46"))), " ✗ expected 46");
        assert_eq!(format_verdict(&result("46", None)), "");
    }

    #[test]
    fn test_count_mismatches() {
        let results = [
            result("35", Some("35")),
            result("47", Some("46")),
            result("1", None),
        ];
        assert_eq!(count_mismatches(&results), 1);
    }
}
