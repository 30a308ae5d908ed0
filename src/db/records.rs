use crate::db::connection::Database;
use crate::domain::record::ApplicationRecord;
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension};

/// Slot name the whole collection lives under. Matches the storage key the
/// browser version of this tool used.
pub const COLLEGES_SLOT: &str = "colleges";

/// Reads the collection back out of its slot.
///
/// An absent slot is the normal first-run state and yields an empty
/// collection. A slot that exists but no longer parses is reported on stderr
/// and also yields an empty collection; the next save overwrites it. Only a
/// database-level failure is an error.
pub fn load_records(db: &Database, slot: &str) -> Result<Vec<ApplicationRecord>, ServerError> {
    let blob: Option<String> = db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM slots WHERE slot = ?1",
            params![slot],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::StorageRead(format!("read slot '{slot}' failed: {e}")))
    })?;

    match blob {
        None => Ok(Vec::new()),
        Some(json) => match serde_json::from_str(&json) {
            Ok(records) => Ok(records),
            Err(e) => {
                eprintln!("Stored data in slot '{slot}' is malformed, starting empty: {e}");
                Ok(Vec::new())
            }
        },
    }
}

/// Serializes the full collection and overwrites the slot. No incremental
/// writes; the collection is small and every mutation rewrites it whole.
pub fn save_records(
    db: &Database,
    slot: &str,
    records: &[ApplicationRecord],
) -> Result<(), ServerError> {
    let json = serde_json::to_string(records)
        .map_err(|e| ServerError::StorageWrite(format!("serialize records failed: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            "INSERT OR REPLACE INTO slots (slot, value) VALUES (?1, ?2)",
            params![slot, json],
        )
        .map_err(|e| ServerError::StorageWrite(format!("write slot '{slot}' failed: {e}")))?;
        Ok(())
    })
}
