//! # handover
//!
//! Shift handover documents for care and ward teams.
//!
//! This library turns a filled-in handover form (area, shift, four free-text
//! sections and an escalation note) into a briefing sentence, an on-screen
//! summary, and a printable A4 PDF.
//!
//! ## Quick Start
//!
//! ```
//! use handover::{generate_document, DocumentMetadata, GenerateOptions, HandoverForm, SectionKey};
//!
//! fn main() -> handover::Result<()> {
//!     let form = HandoverForm::new()
//!         .with_metadata(DocumentMetadata::new().with_area("Cedar Wing").with_shift("Night"))
//!         .with_section(SectionKey::Incidents, "Fall in lounge\nMedication delay");
//!
//!     let pdf = generate_document(&form, &GenerateOptions::default())?;
//!     assert!(pdf.starts_with(b"%PDF"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two layouts**: a detailed multi-page handover and a condensed one-pager
//! - **Briefing sentence**: a fixed-template one-liner for verbal handover
//! - **Summaries**: Markdown and JSON for screens and integrations
//! - **Print-safe mode**: identity fields withheld from every output
//! - **Deterministic output**: a pinned timestamp gives byte-identical PDFs

pub mod error;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod summary;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    artifact_filename, format_timestamp, layout_document, Branding, GenerateOptions,
    LayoutProfile,
};
pub use model::{
    CleanedSection, DocumentMetadata, HandoverForm, Page, RenderedDocument, SectionKey, Sections,
};
pub use summary::{briefing_sentence, to_json, to_markdown, to_text, JsonFormat};
pub use text::{clean_lines, pick_items, wrap_text};

use std::path::Path;

/// Lay out and write a handover PDF.
///
/// # Arguments
///
/// * `form` - The filled-in handover form
/// * `options` - Layout profile, timestamp and branding
///
/// # Example
///
/// ```
/// use handover::{generate_document, GenerateOptions, HandoverForm, LayoutProfile};
///
/// let options = GenerateOptions::new().with_profile(LayoutProfile::Condensed);
/// let pdf = generate_document(&HandoverForm::new(), &options).unwrap();
/// assert!(!pdf.is_empty());
/// ```
pub fn generate_document(form: &HandoverForm, options: &GenerateOptions) -> Result<Vec<u8>> {
    let document = layout_document(form, options);
    log::info!(
        "Generating {} handover: {} page(s)",
        options.profile,
        document.page_count()
    );
    pdf::write_pdf(&document)
}

/// Read a handover form from a JSON file.
///
/// # Example
///
/// ```no_run
/// use handover::read_form;
///
/// let form = read_form("handover.json").unwrap();
/// println!("{}", handover::briefing_sentence(&form));
/// ```
pub fn read_form<P: AsRef<Path>>(path: P) -> Result<HandoverForm> {
    let json = std::fs::read_to_string(path)?;
    HandoverForm::from_json(&json)
}

/// Read a handover form from JSON bytes.
pub fn read_form_bytes(data: &[u8]) -> Result<HandoverForm> {
    let json = std::str::from_utf8(data)
        .map_err(|e| Error::InvalidInput(format!("form is not UTF-8: {}", e)))?;
    HandoverForm::from_json(json)
}
