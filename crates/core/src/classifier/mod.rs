//! Filename classification.
//!
//! Listing entries follow a fixed naming convention:
//!
//! ```text
//! hd_1234_some_title__de_5_1_film.mp4
//! └──── title ─────┘  └tags┘ └role┘ └ext
//! ```
//!
//! The title prefix starts with a resolution tag (`sd`/`hd`), a 4-digit group
//! and an optional `3d` marker. Episodes of a series (`..._s01_3`) collapse
//! to their season title (`..._s01`) so a season is paired as one unit.

mod config;
mod error;
mod filename;
mod types;

pub use config::ClassifierConfig;
pub use error::ClassifyError;
pub use filename::FilenameClassifier;
pub use types::{ClassifiedFile, Role};
