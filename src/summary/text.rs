//! Plain text handover summary.

use crate::model::HandoverForm;

use super::briefing_sentence;

/// Convert a handover to plain text for chat or SMS.
///
/// The briefing sentence comes first, then every non-empty section as a
/// dash list. Identity fields are never included.
pub fn to_text(form: &HandoverForm) -> String {
    let mut output = briefing_sentence(form);
    output.push('\n');

    for section in form.cleaned_sections().iter().filter(|s| !s.is_empty()) {
        output.push('\n');
        output.push_str(&section.title);
        output.push('\n');
        for item in &section.items {
            output.push_str("- ");
            output.push_str(item);
            output.push('\n');
        }
    }

    if let Some(note) = form.escalation_note() {
        output.push_str("\nEscalation / Notes\n");
        output.push_str(note);
        output.push('\n');
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentMetadata, SectionKey};

    #[test]
    fn test_to_text() {
        let form = HandoverForm::new()
            .with_metadata(DocumentMetadata::new().with_area("Cedar Wing").with_reviewer("Nurse", ""))
            .with_section(SectionKey::Tasks, "Restock\nChase GP")
            .with_escalation("Call on-call manager");
        let text = to_text(&form);

        assert!(text.starts_with("Cedar Wing Day: incidents none"));
        assert!(text.contains("\nTasks outstanding\n- Restock\n- Chase GP\n"));
        assert!(!text.contains("Incidents today"));
        assert!(text.ends_with("Escalation / Notes\nCall on-call manager"));
        assert!(!text.contains("Nurse"));
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(
            to_text(&HandoverForm::new()),
            "Area Day: incidents none, staffing none; concerns none; tasks none."
        );
    }
}
