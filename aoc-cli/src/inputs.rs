//! Local store of puzzle inputs and known answers

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Expected answers for one puzzle, indexed by part
///
/// Line N of the answers file holds part N; blank lines are unknown answers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpectedAnswers(Vec<Option<String>>);

impl ExpectedAnswers {
    pub fn parse(content: &str) -> Self {
        Self(
            content
                .lines()
                .map(str::trim)
                .map(|line| (!line.is_empty()).then(|| line.to_string()))
                .collect(),
        )
    }

    /// Expected answer for a 1-based part
    pub fn get(&self, part: u8) -> Option<&str> {
        let index = usize::from(part).checked_sub(1)?;
        self.0.get(index)?.as_deref()
    }
}

/// File-based store for puzzle inputs
///
/// Directory structure:
/// - `{dir}/{year}_day{day:02}.txt` input
/// - `{dir}/{year}_day{day:02}_answers.txt` expected answers (optional)
///
/// Sample mode inserts `_sample` before the suffix of both.
pub struct InputStore {
    dir: PathBuf,
    sample: bool,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>, sample: bool) -> Self {
        Self {
            dir: dir.into(),
            sample,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stem(&self, year: u16, day: u8) -> String {
        let variant = if self.sample { "_sample" } else { "" };
        format!("{}_day{:02}{}", year, day, variant)
    }

    /// Path of the input file for a year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}.txt", self.stem(year, day)))
    }

    /// Path of the expected-answers file for a year/day
    pub fn answers_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_answers.txt", self.stem(year, day)))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read_input(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }

    /// Read the expected answers for a year/day; a missing file means none are known
    pub fn expected_answers(&self, year: u16, day: u8) -> Result<ExpectedAnswers, InputError> {
        let path = self.answers_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(ExpectedAnswers::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ExpectedAnswers::default()),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}
