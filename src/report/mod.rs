// src/report/mod.rs

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::info;

use crate::config::Config;
use crate::load::{load_table, Bill, Legislator, Vote, VoteResult};
use crate::write::write_report;

pub mod bills;
pub mod classify;
pub mod legislators;

pub use bills::{bill_support_oppose_count, BillReportRow, UNKNOWN_SPONSOR};
pub use classify::{classify, Classified, HasVoteType, OPPOSE_VOTE_TYPE, SUPPORT_VOTE_TYPE};
pub use legislators::{legislators_support_oppose_count, LegislatorReportRow};

/// Paths of the reports written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub legislators: PathBuf,
    pub bills: PathBuf,
}

/// Loads the input tables, runs both report pipelines and writes their output.
pub struct ReportProcessor {
    config: Config,
}

impl ReportProcessor {
    /// Creates the output directory if it is missing.
    pub fn new(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "creating output directory `{}`",
                config.output_dir.display()
            )
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Write `legislators-support-oppose-count.csv`.
    pub fn generate_legislators_support_oppose_count(&self) -> Result<PathBuf> {
        let legislators: Vec<Legislator> = load_table(self.data_dir())?;
        let vote_results: Vec<VoteResult> = load_table(self.data_dir())?;

        let rows = legislators_support_oppose_count(&legislators, &vote_results);
        write_report(&self.config.output_dir, &rows)
    }

    /// Write `bills.csv`.
    pub fn generate_bills(&self) -> Result<PathBuf> {
        let legislators: Vec<Legislator> = load_table(self.data_dir())?;
        let bills: Vec<Bill> = load_table(self.data_dir())?;
        let votes: Vec<Vote> = load_table(self.data_dir())?;
        let vote_results: Vec<VoteResult> = load_table(self.data_dir())?;

        let rows = bill_support_oppose_count(&legislators, &bills, &votes, &vote_results);
        write_report(&self.config.output_dir, &rows)
    }

    /// Run both pipelines. They share nothing mutable, so with `parallel`
    /// set they run side by side on the rayon pool; otherwise legislators
    /// first, then bills. The first failure aborts the run, but a report
    /// already written stays on disk.
    pub fn run(&self) -> Result<ReportPaths> {
        let start = Instant::now();
        info!(
            data_dir = %self.config.data_dir.display(),
            output_dir = %self.config.output_dir.display(),
            parallel = self.config.parallel,
            "Starting legislative data processing"
        );

        let (legislators, bills) = if self.config.parallel {
            let (l, b) = rayon::join(
                || self.generate_legislators_support_oppose_count(),
                || self.generate_bills(),
            );
            (l?, b?)
        } else {
            let l = self.generate_legislators_support_oppose_count()?;
            let b = self.generate_bills()?;
            (l, b)
        };

        info!(
            elapsed = ?start.elapsed(),
            "Legislative data processing completed successfully"
        );
        Ok(ReportPaths { legislators, bills })
    }
}
