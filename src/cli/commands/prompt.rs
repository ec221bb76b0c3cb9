use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::{RecordStore, log};
use crate::errors::AppResult;
use crate::ui::fields::FieldSet;
use crate::ui::messages::{info, warning};
use crate::ui::surface::TerminalSurface;
use std::io::{self, BufRead, Write};

/// Interactive single-screen session.
///
/// Fields persist between actions exactly like the edit boxes of a form:
/// `save` does not clear them, only `clear` does. One store connection is
/// opened for the whole session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(&cfg.database)?;
    let controller = Controller::new(&store);

    let mut fields = FieldSet::default();
    let mut surface = TerminalSurface;

    info("Commands: name <text> | email <text> | phone <text> | save | view | clear | show | quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("rclientes> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        let (verb, rest) = match input.split_once(' ') {
            Some((v, r)) => (v, r.trim()),
            None => (input, ""),
        };

        match verb {
            "" => {}
            "name" => fields.name = rest.to_string(),
            "email" => fields.email = rest.to_string(),
            "phone" => fields.phone = rest.to_string(),
            "save" => {
                let inserted = controller.on_save(&fields, &mut surface);
                if inserted
                    && let Err(e) =
                        log::audit(store.conn(), "save", &fields.name, "Client record saved")
                {
                    eprintln!("⚠️ Failed to write internal log: {}", e);
                }
            }
            "view" => controller.on_view(&mut surface)?,
            "clear" => {
                controller.on_clear(&mut fields);
                info("Fields cleared");
            }
            "show" => {
                println!(
                    "name: '{}' | email: '{}' | phone: '{}'",
                    fields.name, fields.email, fields.phone
                );
            }
            "quit" | "exit" => break,
            other => warning(format!("Unknown command: {}", other)),
        }
    }

    Ok(())
}
