use crate::record::{MeasurementRow, Sample, Solution};
use crate::stats::Summary;
use std::collections::BTreeMap;

/// Samples and statistics of one solution.
#[derive(Debug, Clone)]
pub struct SolutionStats {
    pub solution: Solution,

    /// Restore duration of each experiment.
    pub duration_by_experiment: BTreeMap<i64, f64>,
    /// Memory footprint partials of each experiment.
    pub footprint_partials_by_experiment: BTreeMap<i64, Vec<f64>>,

    pub all_durations: Vec<f64>,
    pub all_footprint_totals: Vec<f64>,

    pub duration: Summary,
    pub footprint: Summary,
}

impl SolutionStats {
    pub fn new(solution: Solution) -> Self {
        Self {
            solution,
            duration_by_experiment: BTreeMap::new(),
            footprint_partials_by_experiment: BTreeMap::new(),
            all_durations: Vec::new(),
            all_footprint_totals: Vec::new(),
            duration: Summary::undefined(),
            footprint: Summary::undefined(),
        }
    }
}

/// Per-solution accumulator for all rows of one run.
pub struct ExperimentStore {
    stats_vec: Vec<SolutionStats>,
}

impl ExperimentStore {
    pub fn new() -> Self {
        let stats_vec = Solution::ALL.into_iter().map(SolutionStats::new).collect();
        Self { stats_vec }
    }

    pub fn ingest(&mut self, row: MeasurementRow) {
        let experiment = row.experiment;
        let stats = &mut self.stats_vec[row.solution.idx()];
        match row.sample {
            Sample::Duration(val) => {
                log::debug!("{}: experiment {experiment} duration {val}", row.solution);
                if let Some(prev) = stats.duration_by_experiment.insert(experiment, val) {
                    log::warn!(
                        "{}: duplicate duration for experiment {experiment}, replacing {prev} with {val}",
                        row.solution
                    );
                }
            }
            Sample::Footprint(val) => {
                log::debug!(
                    "{}: experiment {experiment} {} footprint {val}",
                    row.solution,
                    row.tag
                );
                stats
                    .footprint_partials_by_experiment
                    .entry(experiment)
                    .or_default()
                    .push(val);
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, solution: Solution) -> &SolutionStats {
        &self.stats_vec[solution.idx()]
    }

    /// Iterate in the canonical solution order.
    pub fn iter(&self) -> impl Iterator<Item = &SolutionStats> {
        self.stats_vec.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SolutionStats> {
        self.stats_vec.iter_mut()
    }
}
