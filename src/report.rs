use crate::record::Solution;
use crate::stats::Summary;
use crate::store::ExperimentStore;

/// Mean of one solution, as drawn in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub mean: f64,
}

#[derive(Debug)]
pub struct SolutionReport {
    pub solution: Solution,
    pub n_durations: usize,
    pub n_footprints: usize,
    pub duration: Summary,
    pub footprint: Summary,
}

/// Final read-only view of a run, handed to the chart renderer.
///
/// Bars and solutions are always listed as Distributed, Centralized, Conventional.
#[derive(Debug)]
pub struct Report {
    pub restore_duration: Vec<Bar>,
    pub memory_footprint: Vec<Bar>,
    pub solutions: Vec<SolutionReport>,
}

impl Report {
    /// Assemble the report from a finalized store.
    pub fn new(store: &ExperimentStore) -> Self {
        let mut restore_duration = Vec::with_capacity(Solution::ALL.len());
        let mut memory_footprint = Vec::with_capacity(Solution::ALL.len());
        let mut solutions = Vec::with_capacity(Solution::ALL.len());

        for stats in store.iter() {
            let solution = stats.solution;
            restore_duration.push(Bar {
                label: solution.label(),
                mean: stats.duration.mean,
            });
            memory_footprint.push(Bar {
                label: solution.label(),
                mean: stats.footprint.mean,
            });
            solutions.push(SolutionReport {
                solution,
                n_durations: stats.all_durations.len(),
                n_footprints: stats.all_footprint_totals.len(),
                duration: stats.duration,
                footprint: stats.footprint,
            });
        }

        Self {
            restore_duration,
            memory_footprint,
            solutions,
        }
    }

    pub fn log_summary(&self) {
        for sol in &self.solutions {
            log::info!(
                "{}: duration {:.3} ± {:.3} sec over {} experiments, footprint {:.1} ± {:.1} KiB over {} experiments",
                sol.solution,
                sol.duration.mean,
                sol.duration.std_dev,
                sol.n_durations,
                sol.footprint.mean,
                sol.footprint.std_dev,
                sol.n_footprints
            );
        }
    }
}
