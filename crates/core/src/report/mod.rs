//! Report emitter.
//!
//! Each newly completed title becomes one tab-separated line:
//!
//! ```text
//! <film file or "quoted\nlist">\t<trailer file>\t<DD.MM.YYYY>
//! ```

mod config;
mod error;
mod format;
mod writer;

pub use config::ReportConfig;
pub use error::ReportError;
pub use format::{film_field, format_date, format_line};
pub use writer::ReportWriter;
