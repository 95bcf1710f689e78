use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Semantic type of one form field, matching the `data-type` attribute
/// the web forms tag their inputs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "list_number")]
    NumberList,
    #[serde(rename = "list_text")]
    TextList,
    #[serde(rename = "run_range_start")]
    RunRangeStart,
    #[serde(rename = "run_range_end")]
    RunRangeEnd,
    #[serde(rename = "experiment_reference")]
    ExperimentReference,
    #[serde(rename = "batch_run_range")]
    BatchRunRange,
    #[serde(rename = "description")]
    Description,
}

/// One form field as submitted by the browser. Values are always the raw
/// string contents of the input; numeric/boolean/list fields are
/// string-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: String,
}

impl FieldSpec {
    pub fn new(id: &str, kind: FieldKind, required: bool, value: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            required,
            value: value.to_string(),
        }
    }
}

/// How the form addresses the runs it applies to. The caller owns this
/// choice; it is never inferred from which fields happen to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    ByRunRange,
    ByExperiment,
    ByBatch,
}

/// A complete form snapshot handed to the validator. Built fresh from the
/// submitted request before each validation pass and discarded afterward.
#[derive(Debug, Clone)]
pub struct VariablesForm {
    pub mode: SubmissionMode,
    pub fields: Vec<FieldSpec>,
}

// ============================================================================
// Request / Response Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitVariablesRequest {
    pub mode: SubmissionMode,
    #[serde(default)]
    pub run_start: String,
    #[serde(default)]
    pub run_end: String,
    #[serde(default)]
    pub experiment_reference: String,
    #[serde(default)]
    pub run_range: String,
    #[serde(default)]
    pub run_description: String,
    #[serde(default)]
    pub variables: Vec<FieldSpec>,
    /// Set once the user has confirmed submission over conflicting
    /// upcoming runs.
    #[serde(default)]
    pub confirm_conflicts: bool,
}

impl SubmitVariablesRequest {
    /// Assembles the field set for validation. The mode decides which
    /// range fields take part; variable fields are carried as posted.
    pub fn to_form(&self) -> VariablesForm {
        let mut fields = Vec::with_capacity(self.variables.len() + 3);

        match self.mode {
            SubmissionMode::ByRunRange => {
                fields.push(FieldSpec::new(
                    "run_start",
                    FieldKind::RunRangeStart,
                    true,
                    &self.run_start,
                ));
                fields.push(FieldSpec::new(
                    "run_end",
                    FieldKind::RunRangeEnd,
                    false,
                    &self.run_end,
                ));
            }
            SubmissionMode::ByExperiment => {
                fields.push(FieldSpec::new(
                    "experiment_reference_number",
                    FieldKind::ExperimentReference,
                    true,
                    &self.experiment_reference,
                ));
            }
            SubmissionMode::ByBatch => {
                fields.push(FieldSpec::new(
                    "run_range",
                    FieldKind::BatchRunRange,
                    true,
                    &self.run_range,
                ));
            }
        }

        fields.push(FieldSpec::new(
            "run_description",
            FieldKind::Description,
            false,
            &self.run_description,
        ));

        fields.extend(self.variables.iter().cloned());

        VariablesForm {
            mode: self.mode,
            fields,
        }
    }
}

/// A stored variable set, applied to new runs matching its range.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VariableSet {
    pub id: i64,
    pub instrument: String,
    pub start_run: Option<i64>,
    pub end_run: Option<i64>,
    pub experiment_reference: Option<i64>,
    /// JSON array of the submitted variable fields.
    pub variables: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteVariablesQuery {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub experiment_reference: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
