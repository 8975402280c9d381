//! Batch runner wiring the listing, classifier, ledger and report together.

use std::io::Write;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::classifier::FilenameClassifier;
use crate::config::Config;
use crate::grouping::{group_titles, select_new};
use crate::ledger::{LedgerStore, SqliteLedgerStore};
use crate::report::{format_date, format_line, ReportError, ReportWriter};

use super::listing::read_listing;
use super::{RunError, RunSummary};

/// Runs one pairing pass over the configured listing.
///
/// A run is strictly sequential: read the listing, classify every entry
/// (stopping at the first malformed one), group by title, load the ledger,
/// select new complete titles, save the ledger, write the report. A listing
/// without entries touches neither the ledger nor the report.
pub struct BatchRunner<L: LedgerStore = SqliteLedgerStore> {
    config: Config,
    classifier: FilenameClassifier,
    ledger: L,
    report: ReportWriter,
}

impl BatchRunner<SqliteLedgerStore> {
    /// Creates a runner using the SQLite ledger at `paths.ledger`.
    pub fn new(config: Config) -> Result<Self, RunError> {
        let ledger = SqliteLedgerStore::new(&config.paths.ledger, config.backup.clone());
        Self::with_ledger(config, ledger)
    }
}

impl<L: LedgerStore> BatchRunner<L> {
    /// Creates a runner with a custom ledger store.
    pub fn with_ledger(config: Config, ledger: L) -> Result<Self, RunError> {
        let classifier = FilenameClassifier::new(&config.classifier)?;
        let report = ReportWriter::new(&config.paths.output, config.backup.clone());
        Ok(Self {
            config,
            classifier,
            ledger,
            report,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Runs with today's local date in the report.
    pub fn run_today(&self, echo: &mut dyn Write) -> Result<RunSummary, RunError> {
        self.run(Local::now().date_naive(), echo)
    }

    /// Runs with `date` in the report. Report lines are also written to `echo`
    /// when `report.echo` is enabled.
    pub fn run(&self, date: NaiveDate, echo: &mut dyn Write) -> Result<RunSummary, RunError> {
        let listing = read_listing(&self.config.paths.input)?;
        info!(
            path = ?self.config.paths.input,
            entries = listing.len(),
            "Listing read"
        );

        let files = self.classifier.classify_all(&listing)?;
        let groups = group_titles(files);

        let mut summary = RunSummary {
            listed_files: listing.len(),
            titles: groups.len(),
            complete_titles: groups.values().filter(|g| g.is_complete()).count(),
            ..RunSummary::default()
        };

        if groups.is_empty() {
            info!("Listing is empty, nothing to do");
            return Ok(summary);
        }

        let mut reported = self.ledger.load()?;
        let previously_reported = reported.len();

        let selected = select_new(&groups, &mut reported);

        let date = format_date(date, &self.config.report.date_format)?;
        for group in &selected {
            let line = format_line(group, &date);
            if self.config.report.echo {
                writeln!(echo, "{}", line).map_err(ReportError::Echo)?;
            }
            summary.report_lines.push(line);
        }

        self.ledger.save(&reported)?;
        self.report.write(&summary.report_lines)?;

        summary.ledger_titles = reported.len();
        summary.files_written = true;

        info!(
            titles = summary.titles,
            complete = summary.complete_titles,
            new = summary.newly_reported(),
            previously_reported,
            "Run finished"
        );

        Ok(summary)
    }
}
