#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rclientes")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclientes.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rcl()
        .args(["--db", db_path, "save", "Ana", "ana@x.com", "111"])
        .assert()
        .success();

    rcl()
        .args(["--db", db_path, "save", "Bo", "bo@x.com", "222"])
        .assert()
        .success();
}

/// Populate many records directly via the library DB API
pub fn populate_many_clients(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    rclientes::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let name = format!("client-{i}");
        let email = format!("client-{i}@x.com");
        assert!(rclientes::db::queries::insert_record(
            &conn, &name, &email, "000"
        ));
    }
}
