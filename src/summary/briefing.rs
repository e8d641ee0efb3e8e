//! One-line briefing for verbal or chat handover.

use crate::model::{HandoverForm, SectionKey};
use crate::text::pick_items;

/// Items taken from each section for the briefing.
pub const BRIEFING_ITEMS: usize = 2;

/// Build the fixed-template briefing sentence.
///
/// ```text
/// <area> <shift>: incidents <..>, staffing <..>; concerns <..>; tasks <..>[; escalate: <note>].
/// ```
///
/// # Example
///
/// ```
/// use handover::{briefing_sentence, DocumentMetadata, HandoverForm, SectionKey};
///
/// let form = HandoverForm::new()
///     .with_metadata(DocumentMetadata::new().with_area("Cedar Wing").with_shift("Night"))
///     .with_section(SectionKey::Incidents, "Fall in lounge\nMedication delay");
///
/// assert_eq!(
///     briefing_sentence(&form),
///     "Cedar Wing Night: incidents Fall in lounge; Medication delay, staffing none; concerns none; tasks none."
/// );
/// ```
pub fn briefing_sentence(form: &HandoverForm) -> String {
    let metadata = &form.metadata;
    let part = |key: SectionKey| {
        format!(
            "{} {}",
            key.briefing_label(),
            pick_items(form.sections.get(key), BRIEFING_ITEMS)
        )
    };

    let mut sentence = format!(
        "{} {}: {}, {}; {}; {}",
        metadata.area_or("Area"),
        metadata.shift,
        part(SectionKey::Incidents),
        part(SectionKey::Staffing),
        part(SectionKey::Residents),
        part(SectionKey::Tasks),
    );

    if let Some(note) = form.escalation_note() {
        sentence.push_str("; escalate: ");
        sentence.push_str(note);
    }
    sentence.push('.');

    sentence.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentMetadata;

    fn form() -> HandoverForm {
        HandoverForm::new().with_metadata(
            DocumentMetadata::new()
                .with_area("Cedar Wing")
                .with_shift("Night"),
        )
    }

    #[test]
    fn test_briefing_all_empty() {
        assert_eq!(
            briefing_sentence(&form()),
            "Cedar Wing Night: incidents none, staffing none; concerns none; tasks none."
        );
    }

    #[test]
    fn test_briefing_takes_two_items() {
        let form = form()
            .with_section(SectionKey::Tasks, "Obs at 01:00\nRestock\nChase GP")
            .with_section(SectionKey::Residents, "- Resident A");
        assert_eq!(
            briefing_sentence(&form),
            "Cedar Wing Night: incidents none, staffing none; concerns Resident A; tasks Obs at 01:00; Restock."
        );
    }

    #[test]
    fn test_briefing_escalation_clause() {
        let form = form().with_escalation("  Escalated to senior on shift  ");
        assert!(briefing_sentence(&form)
            .ends_with("tasks none; escalate: Escalated to senior on shift."));

        let blank = self::form().with_escalation("   ");
        assert!(!briefing_sentence(&blank).contains("escalate"));
    }

    #[test]
    fn test_briefing_area_fallback() {
        let form = HandoverForm::new();
        assert!(briefing_sentence(&form).starts_with("Area Day: incidents none"));
    }
}
