//! Integration tests for the briefing sentence and text summaries.

use handover::{
    briefing_sentence, clean_lines, pick_items, read_form_bytes, to_json, to_markdown,
    DocumentMetadata, HandoverForm, JsonFormat, SectionKey,
};

fn cedar_wing() -> HandoverForm {
    HandoverForm::new()
        .with_metadata(
            DocumentMetadata::new()
                .with_area("Cedar Wing")
                .with_shift("Night"),
        )
        .with_section(SectionKey::Incidents, "Fall in lounge\nMedication delay")
}

#[test]
fn test_clean_lines_contract() {
    assert!(clean_lines("").is_empty());
    assert!(clean_lines(None).is_empty());
    assert_eq!(clean_lines("- a\n• b \n \n c"), vec!["a", "b", "c"]);
}

#[test]
fn test_pick_items_contract() {
    assert_eq!(pick_items("", 2), "none");
    assert_eq!(pick_items(" \n- \n", 2), "none");
    assert_eq!(pick_items("a\nb\nc", 2), "a; b");
    assert_eq!(pick_items("a", 5), "a");
}

#[test]
fn test_cedar_wing_briefing() {
    assert_eq!(
        briefing_sentence(&cedar_wing()),
        "Cedar Wing Night: incidents Fall in lounge; Medication delay, staffing none; concerns none; tasks none."
    );
}

#[test]
fn test_briefing_from_json_form() {
    let form = read_form_bytes(
        br#"{
            "area": "Cedar Wing",
            "shift": "Night",
            "sections": {
                "incidents": "Fall in lounge\nMedication delay",
                "tasks": "- Restock\n- Chase GP\n- Obs at 01:00"
            },
            "escalation": "Escalated to senior on shift"
        }"#,
    )
    .unwrap();

    assert_eq!(
        briefing_sentence(&form),
        "Cedar Wing Night: incidents Fall in lounge; Medication delay, staffing none; \
         concerns none; tasks Restock; Chase GP; escalate: Escalated to senior on shift."
    );
}

#[test]
fn test_markdown_summary() {
    let form = cedar_wing().with_metadata(
        DocumentMetadata::new()
            .with_area("Cedar Wing")
            .with_shift("Night")
            .with_reviewer("Nurse in Charge", ""),
    );
    let md = to_markdown(&form, "04 Feb 2026, 21:10");

    assert!(md.starts_with("### Handover Summary\n"));
    assert!(md.contains("**Area:** Cedar Wing | **Shift:** Night | **Generated:** 04 Feb 2026, 21:10"));
    assert!(md.contains("**Incidents today:**\n- Fall in lounge\n- Medication delay\n"));
    assert!(md.contains("**Staffing issues:** None reported."));
    assert!(md.contains("**Escalation / Notes:** None."));
    assert!(md.contains("**Reviewed by:** Nurse in Charge"));
    assert!(md.contains("**Review date:** —"));

    let mut safe = form.clone();
    safe.metadata.print_safe = true;
    let hidden = to_markdown(&safe, "04 Feb 2026, 21:10");
    assert!(!hidden.contains("Nurse in Charge"));
    assert!(!hidden.contains("**Completed by:**"));
    assert!(hidden.contains("- Medication delay"));
}

#[test]
fn test_json_summary() {
    let json = to_json(&cedar_wing(), "04 Feb 2026, 21:10", JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["area"], "Cedar Wing");
    assert_eq!(value["shift"], "Night");
    assert_eq!(value["generated_at"], "04 Feb 2026, 21:10");
    assert_eq!(value["sections"][0]["items"][1], "Medication delay");
    assert!(value["briefing"]
        .as_str()
        .unwrap()
        .starts_with("Cedar Wing Night: incidents Fall in lounge"));
}
