// src/variables/validators.rs

use super::models::{FieldKind, FieldSpec, SubmissionMode, VariablesForm};
use crate::common::{variable_display_name, ValidationResult, Validator};

// ============================================================================
// Form Validator
// ============================================================================

/// Validates a submitted variables form against the per-kind rule table.
///
/// Rules run in a fixed order: the mode-selected run range rule first,
/// then the variable fields grouped by kind, then the description length
/// check. Every triggered error is collected; nothing short-circuits, so
/// a field can appear in the error list more than once.
pub struct FormValidator;

const VARIABLE_KIND_ORDER: [FieldKind; 5] = [
    FieldKind::Text,
    FieldKind::Number,
    FieldKind::Boolean,
    FieldKind::NumberList,
    FieldKind::TextList,
];

impl Validator<VariablesForm> for FormValidator {
    fn validate(&self, form: &VariablesForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        validate_range_selection(form, &mut result);

        for kind in VARIABLE_KIND_ORDER {
            for field in form.fields.iter().filter(|f| f.kind == kind) {
                validate_required(field, &mut result);
                match kind {
                    FieldKind::Text => {}
                    FieldKind::Number => validate_number(field, &mut result),
                    FieldKind::Boolean => validate_boolean(field, &mut result),
                    FieldKind::NumberList => validate_number_list(field, &mut result),
                    FieldKind::TextList => validate_text_list(field, &mut result),
                    _ => {}
                }
            }
        }

        for field in form.fields.iter().filter(|f| f.kind == FieldKind::Description) {
            validate_required(field, &mut result);
            validate_description(field, &mut result);
        }

        result
    }
}

// ============================================================================
// Run Range Rules
// ============================================================================

fn validate_range_selection(form: &VariablesForm, result: &mut ValidationResult) {
    match form.mode {
        SubmissionMode::ByRunRange => validate_run_range(form, result),
        SubmissionMode::ByExperiment => validate_experiment_reference(form, result),
        SubmissionMode::ByBatch => validate_batch_run_range(form, result),
    }
}

fn validate_run_range(form: &VariablesForm, result: &mut ValidationResult) {
    let start_id = field_id(form, FieldKind::RunRangeStart, "run_start");
    let end_id = field_id(form, FieldKind::RunRangeEnd, "run_end");
    let start_val = field_value(form, FieldKind::RunRangeStart);
    let end_val = field_value(form, FieldKind::RunRangeEnd);

    if !is_number(start_val) {
        result.add_error(start_id, "Run start must be a number.");
    }
    if !end_val.trim().is_empty() && !is_number(end_val) {
        result.add_error(end_id, "Run finish can only be a number.");
    }
    if let (Some(start), Some(end)) = (parse_number(start_val), parse_number(end_val)) {
        // end == 0 is the "no upper bound" sentinel, not a real run number
        if end < start && end != 0.0 {
            result.add_error(end_id, "Run finish must be greater than the run start.");
        }
    }
}

fn validate_experiment_reference(form: &VariablesForm, result: &mut ValidationResult) {
    let id = field_id(
        form,
        FieldKind::ExperimentReference,
        "experiment_reference_number",
    );
    if !is_number(field_value(form, FieldKind::ExperimentReference)) {
        result.add_error(id, "Experiment Reference Number must be a number.");
    }
}

fn validate_batch_run_range(form: &VariablesForm, result: &mut ValidationResult) {
    let id = field_id(form, FieldKind::BatchRunRange, "run_range");
    let value = field_value(form, FieldKind::BatchRunRange);

    if value.trim().ends_with(',') {
        result.add_error(
            id,
            "Run Numbers must be a comma separated list of either numbers or ranges.",
        );
        return;
    }

    // Check all comma and '-' separated elements; one message per form
    'tokens: for token in value.split(',') {
        let mut previous: Option<f64> = None;
        for part in token.split('-') {
            let number = match parse_number(part) {
                Some(number) => number,
                None => {
                    result.add_error(
                        id,
                        "Run Numbers must be a comma separated list of either numbers or ranges.",
                    );
                    break 'tokens;
                }
            };
            if let Some(previous) = previous {
                if number < previous {
                    result.add_error(id, "Run Range must end in a later run.");
                    break 'tokens;
                }
            }
            previous = Some(number);
        }
    }
}

// ============================================================================
// Per-Kind Field Rules
// ============================================================================

fn validate_required(field: &FieldSpec, result: &mut ValidationResult) {
    if field.required && field.value.trim().is_empty() {
        result.add_error(
            &field.id,
            &format!("{} is required.", variable_display_name(&field.id)),
        );
    }
}

fn validate_number(field: &FieldSpec, result: &mut ValidationResult) {
    if !field.required && field.value.trim().is_empty() {
        return;
    }
    if !is_number(&field.value) {
        result.add_error(
            &field.id,
            &format!("{} must be a number.", variable_display_name(&field.id)),
        );
    }
}

fn validate_boolean(field: &FieldSpec, result: &mut ValidationResult) {
    if !field.required && field.value.trim().is_empty() {
        return;
    }
    let value = field.value.trim().to_lowercase();
    if value != "true" && value != "false" {
        result.add_error(
            &field.id,
            &format!("{} must be a boolean.", variable_display_name(&field.id)),
        );
    }
}

fn validate_number_list(field: &FieldSpec, result: &mut ValidationResult) {
    if field.value.trim().ends_with(',') {
        result.add_error(
            &field.id,
            &format!(
                "{} must be a comma separated list.",
                variable_display_name(&field.id)
            ),
        );
    } else if !field.value.is_empty() {
        // Segments keep their whitespace; the numeric parser tolerates it
        for item in field.value.split(',') {
            if !is_number(item) {
                result.add_error(
                    &field.id,
                    &format!(
                        "{} must be a comma separated list of numbers.",
                        variable_display_name(&field.id)
                    ),
                );
                break;
            }
        }
    }
}

fn validate_text_list(field: &FieldSpec, result: &mut ValidationResult) {
    if field.value.trim().ends_with(',') {
        result.add_error(
            &field.id,
            &format!(
                "{} must be a comma separated list.",
                variable_display_name(&field.id)
            ),
        );
    } else if !field.value.is_empty() {
        for item in field.value.split(',') {
            if item.trim().is_empty() {
                result.add_error(
                    &field.id,
                    &format!(
                        "{} must be a comma separated list.",
                        variable_display_name(&field.id)
                    ),
                );
                break;
            }
        }
    }
}

fn validate_description(field: &FieldSpec, result: &mut ValidationResult) {
    let max_length = 200;
    if field.value.len() >= max_length {
        result.add_error(
            &field.id,
            &format!(
                "{} must be less than {} characters.",
                variable_display_name(&field.id),
                max_length
            ),
        );
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses a string as a finite number, tolerating surrounding whitespace.
/// Empty strings, partial numbers and non-finite values are rejected.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

pub(crate) fn is_number(value: &str) -> bool {
    parse_number(value).is_some()
}

fn field_value<'a>(form: &'a VariablesForm, kind: FieldKind) -> &'a str {
    form.fields
        .iter()
        .find(|f| f.kind == kind)
        .map(|f| f.value.as_str())
        .unwrap_or("")
}

fn field_id<'a>(form: &'a VariablesForm, kind: FieldKind, fallback: &'a str) -> &'a str {
    form.fields
        .iter()
        .find(|f| f.kind == kind)
        .map(|f| f.id.as_str())
        .unwrap_or(fallback)
}
