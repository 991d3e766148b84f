//! The on-disk catalog document.
//!
//! Layout: one pretty-printed JSON object with a `planes` array and a
//! `helicopters` array. Unknown top-level keys are carried through rewrites.
//!
//! Saves are whole-file: write `<file>.tmp`, fsync, rename over the target,
//! then fsync the directory so the rename itself is durable.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::selector::{Collection, Selector};

/// Both collections as stored on disk
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub planes: Vec<Record>,
    #[serde(default)]
    pub helicopters: Vec<Record>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Catalog {
    pub fn new(planes: Vec<Record>, helicopters: Vec<Record>) -> Self {
        Self {
            planes,
            helicopters,
            extra: Map::new(),
        }
    }

    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Planes => &self.planes,
            Collection::Helicopters => &self.helicopters,
        }
    }

    pub fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::Planes => &mut self.planes,
            Collection::Helicopters => &mut self.helicopters,
        }
    }

    /// Iterates the records behind a selector; `all` yields planes then helicopters.
    pub fn records(&self, selector: Selector) -> impl Iterator<Item = &Record> {
        let (first, second): (&[Record], &[Record]) = match selector {
            Selector::One(collection) => (self.collection(collection), &[]),
            Selector::All => (&self.planes, &self.helicopters),
        };
        first.iter().chain(second.iter())
    }

    /// Index of the first record in `collection` whose name matches case-insensitively
    pub fn position(&self, collection: Collection, name: &str) -> Option<usize> {
        self.collection(collection)
            .iter()
            .position(|record| record.has_name(name))
    }

    /// Total records across both collections
    pub fn len(&self) -> usize {
        self.planes.len() + self.helicopters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces the file at `path` with this catalog.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(self).map_err(StoreError::Encode)?;
        let temp_path = temp_path_for(path);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;

        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::io(path, e)
        })?;

        if let Some(parent) = path.parent() {
            let dir = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            if let Ok(handle) = File::open(dir) {
                let _ = handle.sync_all();
            }
        }

        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "catalog.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
