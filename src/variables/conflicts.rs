// src/variables/conflicts.rs

//! Conflict detection between a requested run range and runs that are
//! already scheduled. Informational: the caller surfaces conflicts for
//! user confirmation, submission is never rejected outright.

/// Returns every upcoming run number inside `[run_start, run_end]`.
///
/// An absent or zero `run_end` leaves the range open-ended, so every
/// upcoming run at or after `run_start` conflicts.
pub fn find_conflicts(run_start: i64, run_end: Option<i64>, upcoming: &[i64]) -> Vec<i64> {
    upcoming
        .iter()
        .copied()
        .filter(|&run| {
            run >= run_start
                && match run_end {
                    Some(end) if end != 0 => run <= end,
                    _ => true,
                }
        })
        .collect()
}

/// Run numbers are posted as strings; decimals never appear in practice
/// but a lossy parse keeps the behaviour of the numeric form check.
pub fn parse_run_number(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|number| number as i64))
}
