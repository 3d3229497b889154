use crate::store::{ExperimentStore, SolutionStats};
use crate::stats::Summary;

/// Reduce the grouped samples of a solution into per-experiment values and
/// their summary statistics.
///
/// Derived values are rebuilt from scratch, so calling this again on
/// unchanged samples gives the same result.
pub fn finalize(stats: &mut SolutionStats) {
    stats.all_durations = collect_durations(stats);
    stats.all_footprint_totals = collect_footprint_totals(stats);

    stats.duration = Summary::from_values(&stats.all_durations);
    stats.footprint = Summary::from_values(&stats.all_footprint_totals);

    if !stats.duration.is_defined() {
        log::warn!("{}: no duration samples", stats.solution);
    }
    if !stats.footprint.is_defined() {
        log::warn!("{}: no footprint samples", stats.solution);
    }
}

pub fn finalize_all(store: &mut ExperimentStore) {
    for stats in store.iter_mut() {
        finalize(stats);
    }
}

fn collect_durations(stats: &SolutionStats) -> Vec<f64> {
    stats.duration_by_experiment.values().copied().collect()
}

fn collect_footprint_totals(stats: &SolutionStats) -> Vec<f64> {
    stats
        .footprint_partials_by_experiment
        .values()
        .map(|partials| partials.iter().sum::<f64>())
        .collect()
}
