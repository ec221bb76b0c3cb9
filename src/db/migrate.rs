//! Schema lifecycle for the `clientes` table.
//!
//! The upgrade policy is destructive by design: any schema version change
//! drops the table and recreates it empty. There is no column-level
//! migration.

use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Compiled-in schema version, reconciled against `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Check if the `clientes` table exists.
fn clients_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='clientes'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `clientes` table.
fn create_clients_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clientes (
            ID       INTEGER PRIMARY KEY AUTOINCREMENT,
            NOME     TEXT,
            EMAIL    TEXT,
            TELEFONE TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Read the schema version stored in the database file.
pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// Drop the `clientes` table and recreate it empty at `new_version`.
///
/// All stored records are lost. `old_version` is only reported to the
/// caller's audit trail; no data is carried over.
pub fn upgrade(conn: &Connection, _old_version: i32, new_version: i32) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS clientes;")?;
    create_clients_table(conn)?;
    set_schema_version(conn, new_version)?;
    Ok(())
}

/// Public entry point: make the schema match [`SCHEMA_VERSION`].
///
/// On first access the table is created; on a version mismatch the
/// destructive upgrade runs. Idempotent across repeated opens.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !clients_table_exists(conn)? {
        create_clients_table(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
        return Ok(());
    }

    let stored = schema_version(conn)?;
    if stored != SCHEMA_VERSION {
        warning(format!(
            "Schema version {} differs from {} — dropping and recreating 'clientes' (all records are lost).",
            stored, SCHEMA_VERSION
        ));
        upgrade(conn, stored, SCHEMA_VERSION)?;
    }

    Ok(())
}
