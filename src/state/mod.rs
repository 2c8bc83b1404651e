mod history;
mod profile_store;

pub use history::{append_history, load_history, HistoryEntry};
pub use profile_store::{load_profile, save_profile};
