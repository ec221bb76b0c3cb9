//! Presentation surface consumed by the interaction controller.
//!
//! The controller never prints directly; it emits to this trait. The
//! terminal implementation maps the transient notification to a one-line
//! message (the original screen's toast) and the modal to a titled,
//! dismissible block (the original's alert dialog).

use crate::ui::messages;

pub trait Surface {
    /// Transient, non-blocking notification.
    fn notify(&mut self, message: &str);

    /// Titled, dismissible block of text.
    fn show_modal(&mut self, title: &str, body: &str);
}

#[derive(Default)]
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn notify(&mut self, message: &str) {
        messages::info(message);
    }

    fn show_modal(&mut self, title: &str, body: &str) {
        println!();
        messages::header(title);
        println!("{}", body);
    }
}
