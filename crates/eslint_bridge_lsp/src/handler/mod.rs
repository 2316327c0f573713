//! LSP request/notification handlers.

mod code_action;
mod configuration;
mod documents;
mod files;
mod initialize;
mod save;

pub use code_action::{FIX_ALL_KIND, handle_code_action};
pub use configuration::handle_did_change_configuration;
pub use documents::{handle_did_change, handle_did_close, handle_did_open, handle_did_save};
pub use files::handle_did_change_watched_files;
pub use initialize::{handle_initialize, handle_initialized, handle_shutdown};
pub use save::handle_will_save_wait_until;
