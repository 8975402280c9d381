pub mod backup;
pub mod classifier;
pub mod config;
pub mod grouping;
pub mod ledger;
pub mod report;
pub mod runner;

pub use backup::{BackupConfig, BackupError};
pub use classifier::{ClassifiedFile, ClassifierConfig, ClassifyError, FilenameClassifier, Role};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, PathsConfig,
};
pub use grouping::{group_titles, select_new, TitleGroup, TitleGroups};
pub use ledger::{LedgerError, LedgerStore, ReportedSet, SqliteLedgerStore};
pub use report::{ReportConfig, ReportError, ReportWriter};
pub use runner::{BatchRunner, RunError, RunSummary};
