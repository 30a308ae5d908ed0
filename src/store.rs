// src/store.rs

use crate::db::connection::Database;
use crate::db::records::{load_records, save_records, COLLEGES_SLOT};
use crate::domain::grouping::{group_by_country_and_type, GroupKey};
use crate::domain::record::{create_record, ApplicationDraft, ApplicationRecord, Status};
use crate::errors::ServerError;

/// Owns the canonical, insertion-ordered record collection.
///
/// Every mutation validates first, then applies in memory, then writes the
/// whole collection back to its slot before returning. The grouped view is
/// derived on read and never persisted.
pub struct ApplicationStore {
    db: Database,
    records: Vec<ApplicationRecord>,
    next_id: i64,
}

impl ApplicationStore {
    /// Loads the collection from its slot. An absent or unreadable slot
    /// starts the store empty rather than blocking the whole tool.
    pub fn open(db: Database) -> Result<Self, ServerError> {
        let records = load_records(&db, COLLEGES_SLOT)?;
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        Ok(ApplicationStore {
            db,
            records,
            next_id,
        })
    }

    /// Validates the draft, appends the new record, and persists.
    /// A rejected draft leaves both memory and storage untouched.
    pub fn add(&mut self, draft: ApplicationDraft) -> Result<i64, ServerError> {
        let record = create_record(draft, self.next_id)?;
        let id = record.id;

        self.records.push(record);
        self.next_id += 1;
        self.persist()?;

        Ok(id)
    }

    /// Removes the record with the given id. An absent id is a no-op, so
    /// repeating a delete (double-click, stale page) is harmless.
    pub fn remove(&mut self, id: i64) -> Result<(), ServerError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Replaces only the status of the record with the given id; every other
    /// field stays as created. An absent id is a no-op.
    pub fn set_status(&mut self, id: i64, status: Status) -> Result<(), ServerError> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status;
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Display grouping, recomputed from the current collection.
    pub fn grouped(&self) -> Vec<(GroupKey, Vec<&ApplicationRecord>)> {
        group_by_country_and_type(&self.records)
    }

    fn persist(&self) -> Result<(), ServerError> {
        save_records(&self.db, COLLEGES_SLOT, &self.records)
    }
}
