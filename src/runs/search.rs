// src/runs/search.rs

use super::models::ReductionRun;

/// Filters a run list by a free-text query, the way the run list page
/// narrows as the user types.
///
/// Matching is a case-insensitive substring test over everything a run
/// row displays: run number, title, instrument and experiment reference.
/// A blank query returns the list unchanged.
pub fn filter_runs(runs: Vec<ReductionRun>, query: &str) -> Vec<ReductionRun> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return runs;
    }

    runs.into_iter()
        .filter(|run| run_matches(run, &query))
        .collect()
}

fn run_matches(run: &ReductionRun, query: &str) -> bool {
    if run.run_number.to_string().contains(query) {
        return true;
    }
    if run.instrument.to_lowercase().contains(query) {
        return true;
    }
    if let Some(title) = &run.title {
        if title.to_lowercase().contains(query) {
            return true;
        }
    }
    if let Some(experiment) = run.experiment_reference {
        if experiment.to_string().contains(query) {
            return true;
        }
    }
    false
}
