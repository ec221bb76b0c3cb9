use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::surface::TerminalSurface;

/// Show all stored client records.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(&cfg.database)?;

    let mut surface = TerminalSurface;
    Controller::new(&store).on_view(&mut surface)
}
