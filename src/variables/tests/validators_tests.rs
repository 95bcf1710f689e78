// src/variables/tests/validators_tests.rs

use crate::common::Validator;
use crate::variables::models::{FieldKind, FieldSpec, SubmissionMode, VariablesForm};
use crate::variables::validators::FormValidator;

fn run_range_form(start: &str, end: &str) -> VariablesForm {
    VariablesForm {
        mode: SubmissionMode::ByRunRange,
        fields: vec![
            FieldSpec::new("run_start", FieldKind::RunRangeStart, true, start),
            FieldSpec::new("run_end", FieldKind::RunRangeEnd, false, end),
        ],
    }
}

fn single_field_form(field: FieldSpec) -> VariablesForm {
    VariablesForm {
        mode: SubmissionMode::ByRunRange,
        fields: vec![
            FieldSpec::new("run_start", FieldKind::RunRangeStart, true, "100"),
            FieldSpec::new("run_end", FieldKind::RunRangeEnd, false, ""),
            field,
        ],
    }
}

fn batch_form(run_range: &str) -> VariablesForm {
    VariablesForm {
        mode: SubmissionMode::ByBatch,
        fields: vec![FieldSpec::new(
            "run_range",
            FieldKind::BatchRunRange,
            true,
            run_range,
        )],
    }
}

#[test]
fn test_valid_form_has_no_errors() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-monovan",
        FieldKind::Number,
        true,
        "14.1",
    ));

    let result = FormValidator.validate(&form);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_is_valid_matches_error_list() {
    let cases = vec![
        single_field_form(FieldSpec::new("var-standard-a", FieldKind::Number, true, "1")),
        single_field_form(FieldSpec::new("var-standard-a", FieldKind::Number, true, "abc")),
        run_range_form("", ""),
        batch_form("1-5,10,20-15"),
    ];

    for form in cases {
        let result = FormValidator.validate(&form);
        assert_eq!(result.is_valid, result.errors.is_empty());
    }
}

#[test]
fn test_number_field_rejects_non_numeric() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-e-min",
        FieldKind::Number,
        true,
        "abc",
    ));

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "var-standard-e-min");
    assert!(result.errors[0].message.contains("must be a number"));
}

#[test]
fn test_number_field_accepts_whitespace_and_decimals() {
    for value in [" 5", "5 ", "2.5", "-3", "1e3", "0"] {
        let form = single_field_form(FieldSpec::new(
            "var-standard-e-min",
            FieldKind::Number,
            true,
            value,
        ));
        let result = FormValidator.validate(&form);
        assert!(result.is_valid, "expected {:?} to be a valid number", value);
    }
}

#[test]
fn test_number_field_rejects_non_finite() {
    for value in ["NaN", "Infinity", "inf", "-inf"] {
        let form = single_field_form(FieldSpec::new(
            "var-standard-e-min",
            FieldKind::Number,
            true,
            value,
        ));
        let result = FormValidator.validate(&form);
        assert!(!result.is_valid, "expected {:?} to be rejected", value);
    }
}

#[test]
fn test_required_empty_number_reports_both_rules() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-e-min",
        FieldKind::Number,
        true,
        "",
    ));

    let result = FormValidator.validate(&form);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].message.contains("is required"));
    assert!(result.errors[1].message.contains("must be a number"));
}

#[test]
fn test_optional_empty_number_is_skipped() {
    let form = single_field_form(FieldSpec::new(
        "var-advanced-background",
        FieldKind::Number,
        false,
        "",
    ));

    let result = FormValidator.validate(&form);
    assert!(result.is_valid);
}

#[test]
fn test_display_name_strips_prefix_and_separators() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-spectra_range",
        FieldKind::Text,
        true,
        "",
    ));

    let result = FormValidator.validate(&form);
    assert_eq!(result.errors[0].message, "spectra range is required.");
}

#[test]
fn test_boolean_field_is_case_insensitive() {
    for value in ["true", "True", "FALSE", " false "] {
        let form = single_field_form(FieldSpec::new(
            "var-standard-sum_runs",
            FieldKind::Boolean,
            true,
            value,
        ));
        assert!(FormValidator.validate(&form).is_valid);
    }

    let form = single_field_form(FieldSpec::new(
        "var-standard-sum_runs",
        FieldKind::Boolean,
        true,
        "yes",
    ));
    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert!(result.errors[0].message.contains("must be a boolean"));
}

#[test]
fn test_empty_optional_number_list_is_valid() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-banks",
        FieldKind::NumberList,
        false,
        "",
    ));

    assert!(FormValidator.validate(&form).is_valid);
}

#[test]
fn test_number_list_rejects_trailing_comma() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-banks",
        FieldKind::NumberList,
        false,
        "1,2,",
    ));

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert!(result.errors[0].message.contains("comma separated list"));
}

#[test]
fn test_number_list_accepts_interior_whitespace() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-banks",
        FieldKind::NumberList,
        false,
        " 1, 2 ,3",
    ));

    assert!(FormValidator.validate(&form).is_valid);
}

#[test]
fn test_number_list_rejects_non_numeric_segment() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-banks",
        FieldKind::NumberList,
        false,
        "1,two,3",
    ));

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    // one message per field even with several bad segments
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_text_list_rejects_blank_segment() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-output_names",
        FieldKind::TextList,
        false,
        "a, ,b",
    ));

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert!(result.errors[0].message.contains("comma separated list"));
}

#[test]
fn test_text_list_accepts_plain_items() {
    let form = single_field_form(FieldSpec::new(
        "var-standard-output_names",
        FieldKind::TextList,
        false,
        "first, second,third",
    ));

    assert!(FormValidator.validate(&form).is_valid);
}

#[test]
fn test_run_range_end_before_start() {
    let result = FormValidator.validate(&run_range_form("100", "50"));
    assert!(!result.is_valid);
    assert!(result.errors[0]
        .message
        .contains("must be greater than the run start"));
}

#[test]
fn test_run_range_end_zero_is_open_ended() {
    assert!(FormValidator.validate(&run_range_form("100", "0")).is_valid);
}

#[test]
fn test_run_range_empty_end_is_valid() {
    assert!(FormValidator.validate(&run_range_form("100", "")).is_valid);
}

#[test]
fn test_run_range_requires_numeric_start() {
    let result = FormValidator.validate(&run_range_form("", ""));
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].message, "Run start must be a number.");

    let result = FormValidator.validate(&run_range_form("abc", ""));
    assert!(!result.is_valid);
}

#[test]
fn test_run_range_non_numeric_end() {
    let result = FormValidator.validate(&run_range_form("100", "soon"));
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].message, "Run finish can only be a number.");
}

#[test]
fn test_experiment_mode_ignores_run_range_fields() {
    let form = VariablesForm {
        mode: SubmissionMode::ByExperiment,
        fields: vec![
            // stale range fields left over from a mode switch
            FieldSpec::new("run_start", FieldKind::RunRangeStart, true, "abc"),
            FieldSpec::new("run_end", FieldKind::RunRangeEnd, false, "xyz"),
            FieldSpec::new(
                "experiment_reference_number",
                FieldKind::ExperimentReference,
                true,
                "1410351",
            ),
        ],
    };

    assert!(FormValidator.validate(&form).is_valid);
}

#[test]
fn test_experiment_reference_must_be_number() {
    let form = VariablesForm {
        mode: SubmissionMode::ByExperiment,
        fields: vec![FieldSpec::new(
            "experiment_reference_number",
            FieldKind::ExperimentReference,
            true,
            "",
        )],
    };

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors[0].message,
        "Experiment Reference Number must be a number."
    );
}

#[test]
fn test_batch_range_accepts_numbers_and_ranges() {
    assert!(FormValidator.validate(&batch_form("1-5,10,15-20")).is_valid);
    assert!(FormValidator.validate(&batch_form("60300")).is_valid);
}

#[test]
fn test_batch_range_rejects_decreasing_sub_range() {
    let result = FormValidator.validate(&batch_form("1-5,10,20-15"));
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].message, "Run Range must end in a later run.");
}

#[test]
fn test_batch_range_rejects_non_numeric_token() {
    let result = FormValidator.validate(&batch_form("1-5,ten"));
    assert!(!result.is_valid);
    assert!(result.errors[0].message.contains("numbers or ranges"));
}

#[test]
fn test_batch_range_rejects_trailing_comma() {
    let result = FormValidator.validate(&batch_form("1-5,10,"));
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_description_length_limit() {
    let form = single_field_form(FieldSpec::new(
        "run_description",
        FieldKind::Description,
        false,
        &"a".repeat(200),
    ));

    let result = FormValidator.validate(&form);
    assert!(!result.is_valid);
    assert!(result.errors[0]
        .message
        .contains("must be less than 200 characters"));

    let form = single_field_form(FieldSpec::new(
        "run_description",
        FieldKind::Description,
        false,
        &"a".repeat(199),
    ));
    assert!(FormValidator.validate(&form).is_valid);
}

#[test]
fn test_range_errors_come_before_variable_errors() {
    let form = VariablesForm {
        mode: SubmissionMode::ByRunRange,
        fields: vec![
            FieldSpec::new("var-standard-e-min", FieldKind::Number, true, "abc"),
            FieldSpec::new("run_start", FieldKind::RunRangeStart, true, "100"),
            FieldSpec::new("run_end", FieldKind::RunRangeEnd, false, "50"),
        ],
    };

    let result = FormValidator.validate(&form);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].field, "run_end");
    assert_eq!(result.errors[1].field, "var-standard-e-min");
}

#[test]
fn test_validation_is_idempotent() {
    let form = VariablesForm {
        mode: SubmissionMode::ByRunRange,
        fields: vec![
            FieldSpec::new("run_start", FieldKind::RunRangeStart, true, "abc"),
            FieldSpec::new("run_end", FieldKind::RunRangeEnd, false, "xyz"),
            FieldSpec::new("var-standard-e-min", FieldKind::Number, true, ""),
            FieldSpec::new("var-standard-banks", FieldKind::NumberList, false, "1,2,"),
        ],
    };

    let first = FormValidator.validate(&form);
    let second = FormValidator.validate(&form);
    assert_eq!(first.errors, second.errors);
}
