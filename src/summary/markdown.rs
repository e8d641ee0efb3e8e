//! Markdown handover summary.

use crate::model::{CleanedSection, HandoverForm};

const DASH: &str = "—";

/// Render the on-screen handover summary as Markdown.
///
/// Every section is listed in document order; empty sections read
/// "None reported." Identity fields are left out entirely in print-safe mode.
pub fn to_markdown(form: &HandoverForm, generated_at: &str) -> String {
    let metadata = &form.metadata;
    let mut output = String::new();

    output.push_str("### Handover Summary\n");
    output.push_str(&format!(
        "**Area:** {} | **Shift:** {} | **Generated:** {}\n\n",
        metadata.area_or(DASH),
        metadata.shift,
        generated_at
    ));

    let sections = form.cleaned_sections();
    let blocks: Vec<String> = sections.iter().map(render_section).collect();
    output.push_str(&blocks.join("\n"));

    output.push_str(&format!(
        "\n**Escalation / Notes:** {}\n",
        form.escalation_note().unwrap_or("None.")
    ));

    if !metadata.print_safe {
        let identity = metadata.identity();
        output.push_str("\n---\n");
        output.push_str(&format!(
            "**Completed by:** {}  \n",
            identity.completed_by.unwrap_or(DASH)
        ));
        output.push_str(&format!(
            "**Reviewed by:** {}  \n",
            identity.reviewed_by.unwrap_or(DASH)
        ));
        output.push_str(&format!(
            "**Review date:** {}\n",
            identity.review_date.unwrap_or(DASH)
        ));
    }

    output
}

fn render_section(section: &CleanedSection) -> String {
    if section.is_empty() {
        return format!("**{}:** None reported.\n", section.title);
    }
    let bullets: Vec<String> = section.items.iter().map(|item| format!("- {}", item)).collect();
    format!("**{}:**\n{}\n", section.title, bullets.join("\n"))
}
