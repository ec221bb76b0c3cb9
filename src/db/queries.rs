use crate::errors::AppResult;
use crate::models::client::Client;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Client> {
    Ok(Client {
        id: row.get("ID")?,
        name: row.get("NOME")?,
        email: row.get("EMAIL")?,
        phone: row.get("TELEFONE")?,
    })
}

/// Append a new client record with an auto-assigned id.
///
/// Returns true iff SQLite reports a valid new rowid. Any failure — missing
/// table, locked file, full disk — is reported as false; no error reaches
/// the caller.
pub fn insert_record(conn: &Connection, name: &str, email: &str, phone: &str) -> bool {
    let res = conn.execute(
        "INSERT INTO clientes (NOME, EMAIL, TELEFONE) VALUES (?1, ?2, ?3)",
        params![name, email, phone],
    );
    match res {
        Ok(_) => conn.last_insert_rowid() > 0,
        Err(_) => false,
    }
}

/// Stream every stored record to `visit`, single pass, in storage order.
///
/// Returns the number of rows visited. Not restartable: each call issues a
/// fresh query.
pub fn query_all<F>(conn: &Connection, mut visit: F) -> AppResult<usize>
where
    F: FnMut(&Client) -> AppResult<()>,
{
    let mut stmt = conn.prepare("SELECT * FROM clientes")?;
    let rows = stmt.query_map([], map_row)?;

    let mut count = 0;
    for r in rows {
        let client = r?;
        visit(&client)?;
        count += 1;
    }
    Ok(count)
}

/// Collect all records into a Vec. Convenience over [`query_all`] for
/// listings and tests.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Client>> {
    let mut out = Vec::new();
    query_all(conn, |c| {
        out.push(c.clone());
        Ok(())
    })?;
    Ok(out)
}
