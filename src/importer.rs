//! Row-by-row import of a CSV file into a DynamoDB table.
//!
//! Each data row becomes one upsert of a [`TargetItem`]. Rows are written
//! strictly one after another; a failing row is logged and counted, and the
//! loop moves on. Only problems with the file itself end the run early.

use std::fs::File;
use std::path::Path;

use async_trait::async_trait;
use csv::ReaderBuilder;
use tracing::{debug, error, info, instrument};

use crate::dynamodb::Item;
use crate::error::{ImportError, RowError, WriteError};
use crate::record::{Record, TargetItem};

/// A successful-insert count that is a multiple of this logs a progress line.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Destination of imported items.
#[async_trait]
pub trait ItemWriter: Send + Sync {
    /// Inserts `item`, replacing any stored item with the same primary key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), WriteError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    pub successful_inserts: u64,
    pub failed_inserts: u64,
}

impl RunCounters {
    /// Data rows handled so far.
    pub fn processed(&self) -> u64 {
        self.successful_inserts + self.failed_inserts
    }
}

/// How a run ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    CompletedWithFailures,
    Aborted,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::CompletedWithFailures => 1,
            Self::Aborted => 2,
        }
    }
}

#[derive(Debug)]
pub struct ImportSummary {
    pub counters: RunCounters,
    /// Set when the run stopped before reaching the end of the file.
    pub fatal: Option<ImportError>,
}

impl ImportSummary {
    pub fn status(&self) -> RunStatus {
        if self.fatal.is_some() {
            RunStatus::Aborted
        } else if self.counters.failed_inserts > 0 {
            RunStatus::CompletedWithFailures
        } else {
            RunStatus::Completed
        }
    }

    fn log(&self) {
        info!("Load complete!");
        info!(
            "Successfully inserted: {} records",
            self.counters.successful_inserts
        );
        info!("Failed inserts: {} records", self.counters.failed_inserts);
        debug!("Rows processed: {}", self.counters.processed());
    }
}

pub struct Importer<'a, W: ?Sized> {
    writer: &'a W,
    table_name: &'a str,
    counters: RunCounters,
}

impl<'a, W: ItemWriter + ?Sized> Importer<'a, W> {
    pub fn new(writer: &'a W, table_name: &'a str) -> Self {
        Self {
            writer,
            table_name,
            counters: RunCounters::default(),
        }
    }

    /// Imports every data row of the CSV file at `path`.
    ///
    /// Never fails: row errors are counted and fatal errors are recorded in
    /// the returned summary, which is also logged.
    #[instrument(skip_all, fields(table = %self.table_name))]
    pub async fn load(mut self, path: &Path) -> ImportSummary {
        let fatal = self.load_rows(path).await.err();
        if let Some(err) = &fatal {
            error!("Error: {err}");
        }

        let summary = ImportSummary {
            counters: self.counters,
            fatal,
        };
        summary.log();
        summary
    }

    async fn load_rows(&mut self, path: &Path) -> Result<(), ImportError> {
        let file = File::open(path).map_err(|source| ImportError::open(path, source))?;
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader.headers()?.clone();
        info!("Found columns: {:?}", headers.iter().collect::<Vec<_>>());

        // Row 1 is the header.
        for (row_num, result) in (2..).zip(reader.records()) {
            let record = Record::new(&headers, result?);
            match self.insert(&record).await {
                Ok(()) => self.record_success(),
                Err(err) => self.record_failure(row_num, &record, &err),
            }
        }

        Ok(())
    }

    async fn insert(&self, record: &Record<'_>) -> Result<(), RowError> {
        let item = TargetItem::from_record(record)?.to_item()?;
        self.writer.put_item(self.table_name, item).await?;
        Ok(())
    }

    fn record_success(&mut self) {
        self.counters.successful_inserts += 1;
        if self.counters.successful_inserts % PROGRESS_INTERVAL == 0 {
            info!("Processed {} records...", self.counters.successful_inserts);
        }
    }

    fn record_failure(&mut self, row_num: u64, record: &Record<'_>, err: &RowError) {
        self.counters.failed_inserts += 1;
        match err {
            RowError::Write(WriteError::Service { kind, code, .. }) => {
                error!(row = row_num, %kind, code = %code, "Error inserting row {row_num}: {err}");
            }
            _ => error!(row = row_num, "Unexpected error on row {row_num}: {err}"),
        }
        error!("Row data: {record:?}");
    }
}
