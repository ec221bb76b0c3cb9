use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::{RecordStore, log};
use crate::errors::AppResult;
use crate::ui::fields::FieldSet;
use crate::ui::surface::TerminalSurface;

/// Save a new client record from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { name, email, phone } = cmd {
        let store = RecordStore::open(&cfg.database)?;

        let fields = FieldSet::new(name, email, phone);
        let mut surface = TerminalSurface;

        let inserted = Controller::new(&store).on_save(&fields, &mut surface);

        if inserted
            && let Err(e) = log::audit(store.conn(), "save", name, "Client record saved")
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
