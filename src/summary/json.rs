//! JSON handover summary.

use crate::error::{Error, Result};
use crate::model::{CleanedSection, HandoverForm};
use serde::Serialize;

use super::briefing_sentence;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serializable summary of a handover.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryJson<'a> {
    pub area: &'a str,
    pub shift: &'a str,
    pub generated_at: &'a str,
    pub briefing: String,
    pub sections: Vec<CleanedSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<&'a str>,
}

impl<'a> SummaryJson<'a> {
    /// Collect the summary fields from a form.
    pub fn from_form(form: &'a HandoverForm, generated_at: &'a str) -> Self {
        let identity = form.metadata.identity();
        Self {
            area: form.metadata.area.trim(),
            shift: &form.metadata.shift,
            generated_at,
            briefing: briefing_sentence(form),
            sections: form.cleaned_sections(),
            escalation: form.escalation_note(),
            completed_by: identity.completed_by,
            reviewed_by: identity.reviewed_by,
            review_date: identity.review_date,
        }
    }
}

/// Convert a handover to a JSON summary.
pub fn to_json(form: &HandoverForm, generated_at: &str, format: JsonFormat) -> Result<String> {
    let summary = SummaryJson::from_form(form, generated_at);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&summary),
        JsonFormat::Compact => serde_json::to_string(&summary),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
