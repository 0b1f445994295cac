//! Reading fixture lists from CSV and JSON.

use crate::logic::validation::{validate_fixture, validate_result};
use crate::models::{Fixture, MalformedMatchError, MatchStatus};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Errors that can occur while importing fixtures.
#[derive(Debug)]
pub enum ImportError {
    Io(io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// File extension is neither `.csv` nor `.json`.
    UnsupportedFormat(String),
    Malformed(MalformedMatchError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "Could not read fixtures: {}", e),
            ImportError::Csv(e) => write!(f, "Invalid CSV: {}", e),
            ImportError::Json(e) => write!(f, "Invalid JSON: {}", e),
            ImportError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported fixture file format '{}' (expected csv or json)", ext)
            }
            ImportError::Malformed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Csv(e) => Some(e),
            ImportError::Json(e) => Some(e),
            ImportError::Malformed(e) => Some(e),
            ImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(e: io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

impl From<MalformedMatchError> for ImportError {
    fn from(e: MalformedMatchError) -> Self {
        ImportError::Malformed(e)
    }
}

/// One CSV row. Only `id`, `round`, `team1` and `team2` columns are required.
#[derive(Deserialize)]
struct FixtureRecord {
    id: String,
    round: u32,
    team1: Option<String>,
    team2: Option<String>,
    #[serde(default)]
    match_number: Option<u32>,
    #[serde(default)]
    status: Option<MatchStatus>,
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    score1: Option<u32>,
    #[serde(default)]
    score2: Option<u32>,
}

impl From<FixtureRecord> for Fixture {
    fn from(r: FixtureRecord) -> Self {
        Self {
            id: r.id,
            round: r.round,
            team1: r.team1,
            team2: r.team2,
            match_number: r.match_number,
            status: r.status.unwrap_or_default(),
            winner: r.winner,
            score1: r.score1,
            score2: r.score2,
        }
    }
}

/// Read fixtures from CSV with a header row. Cells are trimmed; empty cells are absent values.
pub fn fixtures_from_csv<R: Read>(reader: R) -> Result<Vec<Fixture>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut fixtures = Vec::new();
    for record in rdr.deserialize::<FixtureRecord>() {
        fixtures.push(Fixture::from(record?));
    }
    checked(fixtures)
}

/// Read fixtures from a JSON array. Team names are trimmed like CSV cells.
pub fn fixtures_from_json<R: Read>(reader: R) -> Result<Vec<Fixture>, ImportError> {
    let mut fixtures: Vec<Fixture> = serde_json::from_reader(reader)?;
    fixtures.iter_mut().for_each(Fixture::trim_names);
    checked(fixtures)
}

/// Read fixtures from a `.csv` or `.json` file.
pub fn fixtures_from_path(path: &Path) -> Result<Vec<Fixture>, ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => fixtures_from_csv(BufReader::new(File::open(path)?)),
        "json" => fixtures_from_json(BufReader::new(File::open(path)?)),
        _ => Err(ImportError::UnsupportedFormat(ext)),
    }
}

fn checked(fixtures: Vec<Fixture>) -> Result<Vec<Fixture>, ImportError> {
    for f in &fixtures {
        validate_fixture(f)?;
        validate_result(f)?;
    }
    log::debug!("Imported {} fixtures", fixtures.len());
    Ok(fixtures)
}
