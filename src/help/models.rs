use serde::{Deserialize, Serialize};

/// One help page entry. `keywords` is the flattened search text the
/// topic is findable by, alongside its category.
#[derive(Debug, Clone, Serialize)]
pub struct HelpTopic {
    pub title: String,
    pub category: String,
    pub keywords: String,
    pub body: String,
}

impl HelpTopic {
    fn new(title: &str, category: &str, keywords: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            keywords: keywords.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HelpQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// The static help catalogue served to the help page.
pub fn help_catalogue() -> Vec<HelpTopic> {
    vec![
        HelpTopic::new(
            "Re-running jobs",
            "usage",
            "rerun re-run resubmit run version failed",
            "Open a run summary and choose Re-run. The new job keeps the \
             same run number with an incremented version.",
        ),
        HelpTopic::new(
            "Configuring new runs",
            "usage",
            "variables configure new runs range submit",
            "Set reduction variables for an upcoming run range from the \
             instrument summary page. Leave the run finish blank (or 0) to \
             apply the variables to all future runs.",
        ),
        HelpTopic::new(
            "Submitting by experiment reference",
            "usage",
            "experiment reference rb number submit",
            "Switch the form to experiment mode to apply variables to every \
             run belonging to one experiment instead of a numeric range.",
        ),
        HelpTopic::new(
            "Batch run submission",
            "advanced",
            "batch runs list ranges comma hyphen",
            "Enter runs as a comma separated list; a hyphenated pair such as \
             1000-1005 expands to the whole sub-range.",
        ),
        HelpTopic::new(
            "Pausing an instrument",
            "advanced",
            "pause resume instrument stop processing",
            "Pausing stops new runs from being queued for reduction. \
             Already-running jobs finish normally.",
        ),
        HelpTopic::new(
            "Run statuses",
            "miscellaneous",
            "status queued processing completed error scheduled",
            "Runs progress through Scheduled, Queued, Processing and finally \
             Completed or Error.",
        ),
    ]
}
