//! Record Store: persistence of client records behind a single open-once
//! connection.

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::AppResult;
use crate::models::client::Client;
use self::pool::DbPool;
use rusqlite::Connection;
use std::path::Path;

/// The persistence component owning the `clientes` table.
///
/// Constructed once per command invocation and passed explicitly to
/// whoever needs it; there is no ambient global handle.
pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    /// Open (creating if needed) the database at `path` and make sure the
    /// schema matches the compiled version.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// In-memory store with the full schema. Used by unit tests and ad-hoc
    /// experiments; behaves exactly like a file-backed store.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::new_in_memory()?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Append a record; true iff a valid new rowid was assigned. Failures
    /// are folded into false, never surfaced.
    pub fn insert_record(&self, name: &str, email: &str, phone: &str) -> bool {
        queries::insert_record(self.conn(), name, email, phone)
    }

    /// Stream all records to `visit` in a single forward pass; returns the
    /// row count.
    pub fn query_all<F>(&self, visit: F) -> AppResult<usize>
    where
        F: FnMut(&Client) -> AppResult<()>,
    {
        queries::query_all(self.conn(), visit)
    }

    pub fn load_all(&self) -> AppResult<Vec<Client>> {
        queries::load_all(self.conn())
    }

    pub fn schema_version(&self) -> AppResult<i32> {
        Ok(migrate::schema_version(self.conn())?)
    }

    /// Destructive schema upgrade: drop and recreate the table empty.
    pub fn upgrade(&self, old_version: i32, new_version: i32) -> AppResult<()> {
        migrate::upgrade(self.conn(), old_version, new_version)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_idempotent_on_the_same_file() {
        let mut path = std::env::temp_dir();
        path.push("rclientes_reopen_test.sqlite");
        std::fs::remove_file(&path).ok();

        {
            let store = RecordStore::open(&path).unwrap();
            assert!(store.insert_record("Ana", "ana@x.com", "111"));
        }
        {
            // Second open must keep existing data intact.
            let store = RecordStore::open(&path).unwrap();
            assert_eq!(store.load_all().unwrap().len(), 1);
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn upgrade_via_store_empties_everything() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(store.insert_record("Ana", "", ""));
        assert!(store.insert_record("Bo", "", ""));

        let v = store.schema_version().unwrap();
        store.upgrade(v, v).unwrap();

        assert_eq!(store.load_all().unwrap().len(), 0);
    }
}
