use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::SCHEMA_VERSION;
use crate::db::{RecordStore, log, stats};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
        upgrade,
    } = cmd
    {
        let store = RecordStore::open(&cfg.database)?;

        //
        // 1) UPGRADE (destructive)
        //
        if *upgrade {
            let old = store.schema_version()?;
            println!(
                "{}▶ Running destructive upgrade (v{} → v{}) — all client records are lost…{}",
                CYAN, old, SCHEMA_VERSION, RESET
            );

            store.upgrade(old, SCHEMA_VERSION)?;

            if let Err(e) = log::audit(
                store.conn(),
                "upgrade",
                "clientes",
                &format!("Dropped and recreated clientes (v{} → v{})", old, SCHEMA_VERSION),
            ) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }

            println!("{}✔ Upgrade completed; table is empty.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&store, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .conn()
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            store.conn().execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
