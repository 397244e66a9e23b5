pub mod browser;
pub mod dialogs;
pub mod keybindings;
mod panels;
pub mod search;
pub mod terminal_guard;

pub use browser::{Browser, Focus, MainPane, Screen};
pub use dialogs::HelpDialog;
pub use terminal_guard::{install_panic_hook, TerminalGuard};
