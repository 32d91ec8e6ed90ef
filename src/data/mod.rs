// Tabular data boundary: CSV in, typed records out.
//
// Raw rows have arbitrary headers and loosely typed cells. Everything is
// coerced here, once, into `Post` / `CleanedPost` / `InfluencerScoreRecord`
// so the rest of the pipeline never re-checks a cell.

pub mod artifact;
pub mod ingest;
pub mod posts;
pub mod scorecard;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use crate::error::{RecommendError, Result};

/// Open a CSV file, mapping a missing file to `DataSourceNotFound`.
pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RecommendError::DataSourceNotFound(path.to_path_buf())
        } else {
            RecommendError::from(e)
        }
    })?;

    Ok(csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file))
}

/// Canonical column name: trimmed, lowercase, spaces replaced by underscores.
/// "Caption Text" and "caption_text" name the same column.
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Header lookup by canonical column name.
pub(crate) struct Columns {
    positions: HashMap<String, usize>,
}

impl Columns {
    pub(crate) fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            // First occurrence wins when two headers normalize to the same name
            positions.entry(normalize_header(header)).or_insert(i);
        }
        Self { positions }
    }

    pub(crate) fn has(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// The cell for `name`, or None when the column is absent or the row is short.
    pub(crate) fn field<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.positions.get(name).and_then(|&i| record.get(i))
    }

    /// The cell for `name` as an owned string, empty when absent.
    pub(crate) fn text(&self, record: &StringRecord, name: &str) -> String {
        self.field(record, name).unwrap_or_default().to_string()
    }
}

/// Parse a like/comment count. Integers parse directly, finite non-negative
/// floats are truncated, anything else (blank, text, negative) is 0.
pub fn parse_count(raw: Option<&str>) -> u64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };

    if let Ok(n) = raw.parse::<u64>() {
        return n;
    }

    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        _ => 0,
    }
}

/// Parse a float cell, 0.0 when absent or unparseable.
pub fn parse_float(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}
