//! Integration tests for PDF generation.

use chrono::{NaiveDate, NaiveDateTime};
use handover::layout::{BlockKind, MORE_MARKER};
use handover::{
    generate_document, layout_document, Branding, DocumentMetadata, GenerateOptions,
    HandoverForm, LayoutProfile, SectionKey,
};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 4)
        .unwrap()
        .and_hms_opt(21, 10, 0)
        .unwrap()
}

fn options(profile: LayoutProfile) -> GenerateOptions {
    GenerateOptions::new()
        .with_profile(profile)
        .with_timestamp(timestamp())
}

fn lines(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|i| format!("{} {}", prefix, i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn busy_form() -> HandoverForm {
    HandoverForm::new()
        .with_metadata(
            DocumentMetadata::new()
                .with_organization("Example Care Home")
                .with_area("Cedar Wing")
                .with_shift("Night")
                .with_completed_by("Senior Carer")
                .with_reviewer("Nurse in Charge", "04/02/2026"),
        )
        .with_section(SectionKey::Incidents, lines("Fall in lounge, resident checked by nurse, no injury; observations repeated hourly", 18))
        .with_section(SectionKey::Staffing, lines("Agency HCA covering", 12))
        .with_section(SectionKey::Residents, lines("- Resident needs two-hourly turns", 16))
        .with_section(SectionKey::Tasks, lines("• Chase GP callback", 10))
        .with_escalation("Escalated to senior on shift. On-call manager informed at 22:40.")
}

fn page_count(pdf: &[u8]) -> usize {
    lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
}

#[test]
fn test_generate_is_deterministic() {
    let form = busy_form();
    for profile in [LayoutProfile::Detailed, LayoutProfile::Condensed] {
        let first = generate_document(&form, &options(profile)).unwrap();
        let second = generate_document(&form, &options(profile)).unwrap();
        assert_eq!(first, second, "{} output differs between runs", profile);
    }
}

#[test]
fn test_timestamp_changes_output() {
    let form = busy_form();
    let later = GenerateOptions::new().with_timestamp(timestamp() + chrono::Duration::minutes(1));
    let a = generate_document(&form, &options(LayoutProfile::Detailed)).unwrap();
    let b = generate_document(&form, &later).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_empty_form_detailed_is_one_page() {
    let pdf = generate_document(&HandoverForm::new(), &options(LayoutProfile::Detailed)).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn test_busy_form_detailed_spans_pages() {
    let form = busy_form();
    let doc = layout_document(&form, &options(LayoutProfile::Detailed));
    assert!(doc.page_count() > 1);

    let pdf = generate_document(&form, &options(LayoutProfile::Detailed)).unwrap();
    assert_eq!(page_count(&pdf), doc.page_count() as usize);

    // Every block title appears exactly once, and nothing is truncated.
    for kind in BlockKind::ORDER {
        assert_eq!(doc.texts().filter(|t| *t == kind.title()).count(), 1);
    }
    assert!(!doc.texts().any(|t| t == MORE_MARKER));
    assert!(doc.texts().any(|t| t == "• Agency HCA covering 12"));
    assert!(doc.texts().any(|t| t == "Reviewed by: Nurse in Charge • 04/02/2026"));
}

#[test]
fn test_condensed_is_one_page() {
    let form = busy_form();
    let pdf = generate_document(&form, &options(LayoutProfile::Condensed)).unwrap();
    assert_eq!(page_count(&pdf), 1);

    let doc = layout_document(&form, &options(LayoutProfile::Condensed));
    let page = &doc.pages[0];
    assert!(page.has_text("Area: Cedar Wing"));
    assert!(page.has_text("Shift: Night"));
    assert!(page.has_text(MORE_MARKER));
    assert!(page.has_text("- Agency HCA covering 5"));
    assert!(!page.has_text("- Agency HCA covering 6"));
}

#[test]
fn test_print_safe_keeps_content() {
    let form = busy_form();
    let mut safe = form.clone();
    safe.metadata.print_safe = true;

    for profile in [LayoutProfile::Detailed, LayoutProfile::Condensed] {
        let normal = layout_document(&form, &options(profile));
        let hidden = layout_document(&safe, &options(profile));

        let cards = |d: &handover::RenderedDocument| -> usize {
            d.pages.iter().map(|p| p.card_count()).sum()
        };
        assert_eq!(cards(&normal), cards(&hidden));

        let body = |d: &handover::RenderedDocument| -> Vec<String> {
            d.texts()
                .filter(|t| t.starts_with("• ") || t.starts_with("- "))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(body(&normal), body(&hidden));

        assert!(normal.texts().any(|t| t.contains("Nurse in Charge")));
        assert!(!hidden.texts().any(|t| t.contains("Nurse in Charge")));
    }
}

#[test]
fn test_branding_in_footer_and_info() {
    let branding = Branding::new()
        .with_product("Ward Notes", "v2.3")
        .with_support_contact("help@example.org");
    let opts = options(LayoutProfile::Detailed).with_branding(branding);
    let doc = layout_document(&HandoverForm::new(), &opts);

    assert!(doc.pages[0].has_text("Ward Notes v2.3 • Support: help@example.org"));
    assert!(doc.pages[0].has_text("Ward Notes"));
    assert_eq!(doc.info.producer, "Ward Notes v2.3");

    let pdf = lopdf::Document::load_mem(&generate_document(&HandoverForm::new(), &opts).unwrap())
        .unwrap();
    let info_id = pdf.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = pdf.get_dictionary(info_id).unwrap();
    assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"Ward Notes v2.3");
}

#[test]
fn test_undecodable_logo_is_ignored() {
    let form = HandoverForm::new()
        .with_metadata(DocumentMetadata::new().with_logo(b"GIF89a-not-really".to_vec()));
    let pdf = generate_document(&form, &options(LayoutProfile::Condensed)).unwrap();
    assert_eq!(page_count(&pdf), 1);
}
