use connect_screens::notify::{Notice, Notify};

/// Notification sink for the terminal; errors go to stderr.
pub struct TerminalNotifier;

impl Notify for TerminalNotifier {
    fn notify(&self, notice: Notice, message: &str) {
        match notice {
            Notice::Error => eprintln!("error: {message}"),
            Notice::Success | Notice::Info => println!("{message}"),
        }
    }
}
