//! Title grouping and completion filtering.

mod filter;
mod grouper;
mod types;

pub use filter::select_new;
pub use grouper::{group_titles, TitleGroups};
pub use types::TitleGroup;
