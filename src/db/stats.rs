use crate::db::RecordStore;
use crate::db::migrate;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &RecordStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA VERSION
    //
    let version = migrate::schema_version(store.conn())?;
    println!("{}• Schema version:{} {}", CYAN, RESET, version);

    //
    // 3) TOTAL CLIENT RECORDS
    //
    let clients: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM clientes", [], |row| row.get(0))?;
    println!(
        "{}• Client records:{} {}{}{}",
        CYAN, RESET, GREEN, clients, RESET
    );

    //
    // 4) AUDIT LOG ROWS
    //
    let log_rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
