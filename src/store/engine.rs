//! # Record Store
//!
//! The in-memory authority for the catalog and the only path through which
//! it is read or mutated.
//!
//! Readers clone an `Arc` of the last committed [`Catalog`] and scan it
//! without holding any lock. Writers are serialized by one mutex covering the
//! whole check-mutate-persist sequence: the change is staged on a copy, the
//! copy is written to disk, and only then is it published. A failed write
//! therefore leaves memory untouched.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::document::Catalog;
use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::selector::{Collection, Selector};

/// Catalog store backed by a single JSON file
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    committed: RwLock<Arc<Catalog>>,
    writer: Mutex<()>,
}

impl Store {
    /// Loads the catalog file at `path`.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the file cannot be read, `StoreError::Malformed` if it
    /// is not a catalog document.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let catalog = Catalog::load(&path)?;
        info!(
            path = %path.display(),
            planes = catalog.planes.len(),
            helicopters = catalog.helicopters.len(),
            "catalog loaded"
        );
        Ok(Self::with_catalog(path, catalog))
    }

    /// Writes `catalog` to `path` (creating parent directories) and opens a store on it.
    pub fn create(path: impl Into<PathBuf>, catalog: Catalog) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        catalog.save(&path)?;
        info!(path = %path.display(), records = catalog.len(), "catalog created");
        Ok(Self::with_catalog(path, catalog))
    }

    fn with_catalog(path: PathBuf, catalog: Catalog) -> Self {
        Self {
            path,
            committed: RwLock::new(Arc::new(catalog)),
            writer: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last committed state
    pub fn snapshot(&self) -> Arc<Catalog> {
        // The guarded value is only ever replaced whole, so a poisoned lock still holds a valid catalog.
        Arc::clone(&self.committed.read().unwrap_or_else(PoisonError::into_inner))
    }

    // ==================
    // Reads
    // ==================

    /// All records behind `selector`; `all` is planes followed by helicopters.
    pub fn list_collection(&self, selector: Selector) -> Vec<Record> {
        let records: Vec<Record> = self.snapshot().records(selector).cloned().collect();
        debug!(%selector, count = records.len(), "list collection");
        records
    }

    /// First record whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, selector: Selector, name: &str) -> Option<Record> {
        let found = self
            .snapshot()
            .records(selector)
            .find(|record| record.has_name(name))
            .cloned();
        debug!(%selector, name, found = found.is_some(), "find by name");
        found
    }

    /// Every record whose `country` contains `needle`, ignoring case. May be empty.
    pub fn filter_by_country(&self, selector: Selector, needle: &str) -> Vec<Record> {
        let matches: Vec<Record> = self
            .snapshot()
            .records(selector)
            .filter(|record| record.country_contains(needle))
            .cloned()
            .collect();
        debug!(%selector, country = needle, count = matches.len(), "filter by country");
        matches
    }

    // ==================
    // Mutations
    // ==================

    /// Appends `record` to `collection` and persists.
    ///
    /// # Errors
    ///
    /// `StoreError::DuplicateName` if the collection already holds the name
    /// (case-insensitive); persistence errors if the file cannot be replaced.
    pub fn insert(&self, collection: Collection, record: Record) -> StoreResult<Record> {
        let name = record.name().unwrap_or_default().to_string();
        let inserted = self.mutate(|catalog| {
            if catalog.position(collection, &name).is_some() {
                return Err(StoreError::DuplicateName(name.clone()));
            }
            catalog.collection_mut(collection).push(record.clone());
            Ok(record)
        })?;
        info!(%collection, name = %name, "record inserted");
        Ok(inserted)
    }

    /// Shallow-merges `patch` onto the record named `name` and persists.
    ///
    /// The merged record is not schema-checked. Renaming onto a name held by
    /// another record of the same collection is refused.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no record has that name, `StoreError::DuplicateName`
    /// on a clashing rename, persistence errors otherwise.
    pub fn update_by_name(
        &self,
        collection: Collection,
        name: &str,
        patch: Map<String, Value>,
    ) -> StoreResult<Record> {
        let updated = self.mutate(|catalog| {
            let index = catalog
                .position(collection, name)
                .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

            let mut merged = catalog.collection(collection)[index].clone();
            merged.merge(patch);

            if let Some(new_name) = merged.name() {
                let clash = catalog
                    .collection(collection)
                    .iter()
                    .enumerate()
                    .any(|(i, other)| i != index && other.has_name(new_name));
                if clash {
                    return Err(StoreError::DuplicateName(new_name.to_string()));
                }
            }

            catalog.collection_mut(collection)[index] = merged.clone();
            Ok(merged)
        })?;
        info!(%collection, name, "record updated");
        Ok(updated)
    }

    /// Removes the record named `name` and persists.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if absent, persistence errors otherwise.
    pub fn delete_by_name(&self, collection: Collection, name: &str) -> StoreResult<()> {
        self.mutate(|catalog| {
            let index = catalog
                .position(collection, name)
                .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
            catalog.collection_mut(collection).remove(index);
            Ok(())
        })?;
        info!(%collection, name, "record deleted");
        Ok(())
    }

    /// Runs `op` on a staged copy, persists it, then publishes it.
    fn mutate<T>(&self, op: impl FnOnce(&mut Catalog) -> StoreResult<T>) -> StoreResult<T> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut staged = Catalog::clone(&self.snapshot());
        let output = op(&mut staged)?;
        staged.save(&self.path)?;

        *self
            .committed
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(staged);
        Ok(output)
    }
}
