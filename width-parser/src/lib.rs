#![warn(clippy::all, rust_2018_idioms)]

//! Parser for BDD width files.
//!
//! A width file is read line by line. A line holding exactly `#` closes the
//! current series, a line holding a non-negative floating point number is
//! appended to the current series, and every other line is a value
//! description which is skipped. One file may therefore contribute several series to a
//! [`SeriesSet`].

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

const DELIMITER: &str = "#";

/// Errors that make an input file unusable. Malformed lines are not errors.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file could not be opened (missing, no permission, ...).
    #[error("the input file '{path}' could not be opened: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was opened, but reading from it failed midway.
    #[error("an I/O error occurred while reading '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The kinds of lines found in a width file.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Line<'a> {
    Delimiter,
    Value(f64),
    Description(&'a str),
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str) -> Self {
        if raw == DELIMITER {
            return Line::Delimiter;
        }
        // Widths are finite and never negative. Anything else ("NaN", "inf",
        // "-3") is treated like any other description.
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Line::Value(value),
            _ => Line::Description(raw),
        }
    }
}

/// One sequence of per-level widths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value of the series. Starts from 0.0, so empty series (and
    /// series without positive values) have a peak of 0.0.
    pub fn peak(&self) -> f64 {
        self.values
            .iter()
            .fold(0.0, |peak, &v| if v > peak { v } else { peak })
    }
}

/// All series of a session together with their display labels, in order of
/// arrival.
///
/// Series and labels are stored as pairs, so both collections always have the
/// same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    entries: Vec<(String, Series)>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read all files in the given order. The first file that cannot be read
    /// aborts the whole operation.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ParseError> {
        let mut set = Self::new();
        for path in paths {
            set.push_path(path.as_ref())?;
        }
        Ok(set)
    }

    /// Parse in-memory text as if it was read from a file called `name`.
    pub fn from_string(name: &str, text: &str) -> Self {
        let mut set = Self::new();
        set.push_lines(name, text.lines());
        set
    }

    /// Append the series of the file at `path`. The path, as given, is used
    /// as label.
    pub fn push_path(&mut self, path: &Path) -> Result<usize, ParseError> {
        log::info!("reading input file {:?}", path);
        let file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        self.push_reader(&name, BufReader::new(file))
            .map_err(|source| ParseError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Append the series read from `reader`. Returns the number of series
    /// added.
    pub fn push_reader<R: BufRead>(&mut self, name: &str, reader: R) -> std::io::Result<usize> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(self.push_lines(name, lines.iter().map(String::as_str)))
    }

    /// Append the series contained in `lines`. Returns the number of series
    /// added.
    pub fn push_lines<'a, I>(&mut self, name: &str, lines: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let first_new = self.entries.len();
        let mut current = Vec::new();
        for (line_no, raw) in lines.into_iter().enumerate() {
            match Line::classify(raw) {
                Line::Delimiter => {
                    let series = std::mem::take(&mut current);
                    self.close_series(name, first_new, series);
                }
                Line::Value(value) => {
                    log::trace!("{name}:{}: value {value}", line_no + 1);
                    current.push(value);
                }
                Line::Description(text) => {
                    log::trace!("{name}:{}: skipping description '{text}'", line_no + 1);
                }
            }
        }
        // A missing trailing delimiter does not drop the last series.
        if !current.is_empty() {
            self.close_series(name, first_new, current);
        }
        self.entries.len() - first_new
    }

    fn close_series(&mut self, name: &str, first_new: usize, values: Vec<f64>) {
        let k = self.entries.len() - first_new + 1;
        let label = if k > 1 {
            format!("{name}({k})")
        } else {
            name.to_string()
        };
        log::debug!("closing series '{}' with {} values", label, values.len());
        self.entries.push((label, Series::new(values)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn series(&self, idx: usize) -> Option<&Series> {
        self.entries.get(idx).map(|(_, series)| series)
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.entries
            .iter()
            .map(|(label, series)| (label.as_str(), series))
    }

    /// Length of the longest series (the depth of the deepest BDD).
    pub fn max_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, series)| series.len())
            .max()
            .unwrap_or(0)
    }

    /// Largest value over all series, 0.0 if there is none.
    pub fn global_peak(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, series)| series.peak())
            .fold(0.0, |peak, v| if v > peak { v } else { peak })
    }
}

// -------------------------------- Tests ------------------------------------
