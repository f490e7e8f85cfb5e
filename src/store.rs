#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use crate::{
    persistence::{self, PersistError},
    record::GradeRecord,
};

/// The in-memory grade list together with the file that backs it.
///
/// The store owns the list for the lifetime of the process; records are only
/// ever appended or cleared all at once, and insertion order is preserved
/// across save and reload.
pub struct Store {
    /// Records in insertion order.
    records: Vec<GradeRecord>,
    /// Backing file for [`Store::save`] and [`Store::clear`].
    path:    PathBuf,
}

impl Store {
    /// Opens the store backed by `path`, loading any records already
    /// persisted there. A missing file means a fresh start, not a failure;
    /// a malformed file fails the open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        let records = match persistence::load(&path) {
            Ok(records) => {
                tracing::info!("found grade file at {}, {} grades loaded", path.display(), records.len());
                records
            }
            Err(PersistError::NotFound { .. }) => {
                tracing::info!("no grade file found at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { records, path })
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[GradeRecord] {
        &self.records
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record to the end of the list.
    pub fn push(&mut self, record: GradeRecord) {
        self.records.push(record);
    }

    /// Writes the full list to the backing file.
    pub fn save(&self) -> Result<(), PersistError> {
        persistence::save(&self.records, &self.path)
    }

    /// Empties the list and deletes the backing file.
    pub fn clear(&mut self) -> Result<(), PersistError> {
        persistence::clear(&self.path)?;
        self.records.clear();
        Ok(())
    }
}
