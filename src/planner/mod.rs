pub mod assembly;
pub mod filter;
pub mod summary;
pub mod targets;

pub use assembly::generate_meal_plan;
pub use filter::filter_catalog;
pub use summary::summarize;
pub use targets::{daily_target, MacroRatios};
