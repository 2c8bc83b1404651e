pub mod prompts;
pub mod render;

pub use prompts::prompt_profile;
pub use render::{render_history, render_summary, render_target};
