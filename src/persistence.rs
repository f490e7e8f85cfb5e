#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::record::GradeRecord;

/// File the tracker reads and writes when no other path is given.
pub const DEFAULT_GRADE_FILE: &str = "file.json";

/// An enum to represent possible errors with the grade file
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// The grade file does not exist yet; callers treat this as "start
    /// empty" rather than as a failure.
    #[error("no grade file found at `{path}`")]
    NotFound {
        /// path that was looked up
        path: String,
    },
    /// A line of the grade file was not a well-formed record. Required keys
    /// are `percent` and `credits`; a line missing either fails the whole
    /// load.
    #[error("malformed grade record on line {line}")]
    Parse {
        /// 1-based line number within the grade file
        line:   usize,
        /// the underlying decode error
        source: serde_json::Error,
    },
    /// A record could not be encoded while saving.
    #[error("could not encode grade record as JSON")]
    Encode(#[source] serde_json::Error),
    /// Any other filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads every record from the grade file at `path`, in file order.
///
/// One JSON object per line; blank lines are skipped. A missing file is
/// reported as [`PersistError::NotFound`] so callers can start with an empty
/// list instead of failing.
pub fn load(path: &Path) -> Result<Vec<GradeRecord>, PersistError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PersistError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(PersistError::Io(e)),
    };

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| PersistError::Parse {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Overwrites the grade file at `path` with one JSON object per record, in
/// the order given.
pub fn save(records: &[GradeRecord], path: &Path) -> Result<(), PersistError> {
    let mut out = BufWriter::new(fs::File::create(path)?);

    for record in records {
        serde_json::to_writer(&mut out, record).map_err(PersistError::Encode)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

/// Deletes the grade file at `path`. A file that is already gone is fine.
pub fn clear(path: &Path) -> Result<(), PersistError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PersistError::Io(e)),
    }
}
