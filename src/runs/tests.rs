// src/runs/tests.rs

#[cfg(test)]
mod tests {
    use crate::runs::models::ReductionRun;
    use crate::runs::search::filter_runs;

    fn run(run_number: i64, instrument: &str, title: &str, experiment: i64) -> ReductionRun {
        ReductionRun {
            run_number,
            run_version: 0,
            instrument: instrument.to_string(),
            title: Some(title.to_string()),
            experiment_reference: Some(experiment),
            status: "Completed".to_string(),
            created_at: None,
        }
    }

    fn sample_runs() -> Vec<ReductionRun> {
        vec![
            run(60300, "MARI", "Vanadium calibration", 1410351),
            run(60301, "MARI", "Sample scan 5K", 1410351),
            run(44521, "WISH", "Powder alignment", 1390045),
        ]
    }

    #[test]
    fn test_blank_query_returns_everything() {
        assert_eq!(filter_runs(sample_runs(), "").len(), 3);
        assert_eq!(filter_runs(sample_runs(), "   ").len(), 3);
    }

    #[test]
    fn test_matches_run_number_substring() {
        let matches = filter_runs(sample_runs(), "6030");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|r| r.instrument == "MARI"));
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let matches = filter_runs(sample_runs(), "vanadium");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].run_number, 60300);
    }

    #[test]
    fn test_matches_instrument_name() {
        let matches = filter_runs(sample_runs(), "wish");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].run_number, 44521);
    }

    #[test]
    fn test_matches_experiment_reference() {
        let matches = filter_runs(sample_runs(), "1390045");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_runs(sample_runs(), "zzz").is_empty());
    }
}
