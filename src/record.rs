//! Measurement records parsed from the benchmark CSV.
//!
//! Column layout:
//! `ReplicaSet,Solution,Experiment,SmocId,RestoreDurationInSec,VmPeak,VmSize,VmHWM,VmRSS,VmData,DeltaMemoryUsageInKbFromTop`

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use std::{fmt, str::FromStr};

const COL_SOLUTION: usize = 1;
const COL_EXPERIMENT: usize = 2;
const COL_SAMPLE: usize = 3;
const COL_DURATION: usize = 4;
const COL_VM_RSS: usize = 8;

/// Sample identifier of the row that carries the restore duration.
pub const DURATION_TAG: &str = "smoc5";

/// Solution under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solution {
    Distributed,
    Centralized,
    Conventional,
}

impl Solution {
    /// All solutions, in the order they are reported.
    pub const ALL: [Solution; 3] = [
        Solution::Distributed,
        Solution::Centralized,
        Solution::Conventional,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Name used in the input file.
    pub fn key(self) -> &'static str {
        match self {
            Solution::Distributed => "distributed",
            Solution::Centralized => "centralized",
            Solution::Conventional => "conventional",
        }
    }

    /// Name used in charts and reports.
    pub fn label(self) -> &'static str {
        match self {
            Solution::Distributed => "Distributed",
            Solution::Centralized => "Centralized",
            Solution::Conventional => "Conventional",
        }
    }
}

impl FromStr for Solution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Solution::ALL.into_iter().find(|sol| sol.key() == s) {
            Some(sol) => Ok(sol),
            None => bail!("unknown solution {s:?}"),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value carried by a row, selected by its sample identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Restore duration in seconds.
    Duration(f64),
    /// Resident set size in KiB, one partial of the experiment footprint.
    Footprint(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub solution: Solution,
    pub experiment: i64,
    pub tag: String,
    pub sample: Sample,
}

impl MeasurementRow {
    /// Parse a data row.
    ///
    /// Non-numeric experiment, duration or memory fields are read as zero and
    /// logged; the row is kept. Negative experiment indices are kept as they are.
    /// Missing columns and unknown solutions are errors.
    pub fn parse(record: &StringRecord, i_row: usize) -> Result<Self> {
        let field = |col: usize| {
            record
                .get(col)
                .with_context(|| format!("row has {} columns, missing column {col}", record.len()))
        };

        let solution: Solution = field(COL_SOLUTION)?.parse()?;
        let experiment: i64 = parse_or_zero(field(COL_EXPERIMENT)?, "experiment", i_row);
        let tag = field(COL_SAMPLE)?.to_string();

        let sample = if tag == DURATION_TAG {
            Sample::Duration(parse_or_zero(field(COL_DURATION)?, "duration", i_row))
        } else {
            Sample::Footprint(parse_or_zero(field(COL_VM_RSS)?, "VmRSS", i_row))
        };

        Ok(Self {
            solution,
            experiment,
            tag,
            sample,
        })
    }
}

/// Parse every row after the header.
///
/// The first row is always the header and is never read as data.
pub fn parse_rows(records: &[StringRecord]) -> Result<Vec<MeasurementRow>> {
    records
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i_row, record)| {
            MeasurementRow::parse(record, i_row).with_context(|| format!("invalid row {i_row}"))
        })
        .collect()
}

fn parse_or_zero<T>(field: &str, name: &str, i_row: usize) -> T
where
    T: FromStr + Default,
{
    match field.trim().parse() {
        Ok(val) => val,
        Err(_) => {
            log::warn!("row {i_row}: malformed {name} {field:?}, using 0");
            T::default()
        }
    }
}
