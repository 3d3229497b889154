use crate::aggregate::finalize_all;
use crate::record::parse_rows;
use crate::report::Report;
use crate::store::ExperimentStore;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};

/// Collects benchmark rows and summarizes them per solution.
pub struct Analyzer {
    store: ExperimentStore,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            store: ExperimentStore::new(),
        }
    }

    /// Read a benchmark CSV file and ingest all of its data rows.
    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let records = {
            let reader = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
            read_records(reader).with_context(|| format!("failed to read {file:?}"))?
        };
        log::info!("read {} rows from {file:?}", records.len());

        self.add_records(&records)
    }

    /// Ingest already-read records, the first of which is the header.
    pub fn add_records(&mut self, records: &[StringRecord]) -> Result<()> {
        let rows = parse_rows(records).context("failed to parse rows")?;
        for row in rows {
            self.store.ingest(row);
        }
        Ok(())
    }

    /// Compute the statistics of every solution and assemble the report.
    pub fn finish(mut self) -> Report {
        finalize_all(&mut self.store);
        Report::new(&self.store)
    }
}

fn read_records<R: Read>(reader: R) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read CSV record")
}
