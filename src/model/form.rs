//! Handover form input types.

use crate::error::Result;
use crate::text::clean_lines;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed set of free-text sections, declared in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    /// Incidents during the shift
    Incidents,
    /// Staffing shortfalls and cover
    Staffing,
    /// Residents or patients needing attention
    Residents,
    /// Work left for the next shift
    Tasks,
}

impl SectionKey {
    /// All sections in the order they appear in every output.
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Incidents,
        SectionKey::Staffing,
        SectionKey::Residents,
        SectionKey::Tasks,
    ];

    /// Heading used in the summary and the PDF.
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::Incidents => "Incidents today",
            SectionKey::Staffing => "Staffing issues",
            SectionKey::Residents => "Residents of concern",
            SectionKey::Tasks => "Tasks outstanding",
        }
    }

    /// Word used for this section in the briefing sentence.
    pub fn briefing_label(self) -> &'static str {
        match self {
            SectionKey::Incidents => "incidents",
            SectionKey::Staffing => "staffing",
            SectionKey::Residents => "concerns",
            SectionKey::Tasks => "tasks",
        }
    }
}

/// Raw section text keyed by [`SectionKey`]. Missing keys read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections(BTreeMap<SectionKey, String>);

impl Sections {
    /// Create an empty section map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw text for a section.
    pub fn set(&mut self, key: SectionKey, text: impl Into<String>) {
        self.0.insert(key, text.into());
    }

    /// Set the raw text for a section (builder form).
    pub fn with(mut self, key: SectionKey, text: impl Into<String>) -> Self {
        self.set(key, text);
        self
    }

    /// Raw text for a section, empty when unset.
    pub fn get(&self, key: SectionKey) -> &str {
        self.0.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// All sections in document order, including unset ones.
    pub fn iter(&self) -> impl Iterator<Item = Section<'_>> + '_ {
        SectionKey::ALL.into_iter().map(move |key| Section {
            key,
            title: key.title(),
            raw_text: self.get(key),
        })
    }
}

/// One section as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// Which section this is
    pub key: SectionKey,
    /// Display title
    pub title: &'static str,
    /// Unprocessed text, one item per line
    pub raw_text: &'a str,
}

impl Section<'_> {
    /// Clean the raw text into items.
    pub fn clean(&self) -> CleanedSection {
        CleanedSection {
            title: self.title.to_string(),
            items: clean_lines(self.raw_text),
        }
    }
}

/// A section after line cleanup. Items are never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedSection {
    /// Display title
    pub title: String,
    /// Cleaned items in input order
    pub items: Vec<String>,
}

impl CleanedSection {
    /// Check if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn default_shift() -> String {
    "Day".to_string()
}

/// Who, where and when a handover covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Organisation name shown in the header band
    pub organization: String,

    /// Area, unit or ward
    pub area: String,

    /// Shift label (e.g. "Day", "Night")
    #[serde(default = "default_shift")]
    pub shift: String,

    /// Person who completed the handover
    pub completed_by: String,

    /// Person who reviewed the handover
    pub reviewed_by: String,

    /// Free-form review date
    pub review_date: String,

    /// Withhold identity fields from every output
    pub print_safe: bool,

    /// Raw logo image bytes (PNG or JPEG)
    #[serde(skip)]
    pub logo: Option<Vec<u8>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            organization: String::new(),
            area: String::new(),
            shift: default_shift(),
            completed_by: String::new(),
            reviewed_by: String::new(),
            review_date: String::new(),
            print_safe: false,
            logo: None,
        }
    }
}

impl DocumentMetadata {
    /// Create metadata with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the organisation name.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Set the area.
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the shift label.
    pub fn with_shift(mut self, shift: impl Into<String>) -> Self {
        self.shift = shift.into();
        self
    }

    /// Set who completed the handover.
    pub fn with_completed_by(mut self, name: impl Into<String>) -> Self {
        self.completed_by = name.into();
        self
    }

    /// Set reviewer name and review date.
    pub fn with_reviewer(mut self, name: impl Into<String>, date: impl Into<String>) -> Self {
        self.reviewed_by = name.into();
        self.review_date = date.into();
        self
    }

    /// Enable or disable print-safe mode.
    pub fn with_print_safe(mut self, print_safe: bool) -> Self {
        self.print_safe = print_safe;
        self
    }

    /// Attach logo bytes.
    pub fn with_logo(mut self, logo: Vec<u8>) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Area label, or `fallback` when blank.
    pub fn area_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(&self.area).unwrap_or(fallback)
    }

    /// Trimmed identity fields `(completed_by, reviewed_by, review_date)`.
    ///
    /// All `None` in print-safe mode.
    pub fn identity(&self) -> Identity<'_> {
        if self.print_safe {
            return Identity::default();
        }
        Identity {
            completed_by: non_blank(&self.completed_by),
            reviewed_by: non_blank(&self.reviewed_by),
            review_date: non_blank(&self.review_date),
        }
    }
}

/// Identity fields after print-safe filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity<'a> {
    /// Completed by, if set and visible
    pub completed_by: Option<&'a str>,
    /// Reviewed by, if set and visible
    pub reviewed_by: Option<&'a str>,
    /// Review date, if set and visible
    pub review_date: Option<&'a str>,
}

impl Identity<'_> {
    /// Whether a review line should be shown.
    pub fn has_review(&self) -> bool {
        self.reviewed_by.is_some() || self.review_date.is_some()
    }
}

pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A complete handover: metadata, sections and the escalation note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverForm {
    /// Header and footer fields
    #[serde(flatten)]
    pub metadata: DocumentMetadata,

    /// Free-text sections
    #[serde(default)]
    pub sections: Sections,

    /// Escalation or free notes
    #[serde(default)]
    pub escalation: String,
}

impl HandoverForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form from JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use handover::HandoverForm;
    ///
    /// let form = HandoverForm::from_json(r#"{"area": "Cedar Wing", "sections": {"tasks": "Restock"}}"#).unwrap();
    /// assert_eq!(form.metadata.shift, "Day");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the raw text of one section.
    pub fn with_section(mut self, key: SectionKey, text: impl Into<String>) -> Self {
        self.sections.set(key, text);
        self
    }

    /// Set the escalation note.
    pub fn with_escalation(mut self, text: impl Into<String>) -> Self {
        self.escalation = text.into();
        self
    }

    /// All sections cleaned, in document order.
    pub fn cleaned_sections(&self) -> Vec<CleanedSection> {
        self.sections.iter().map(|section| section.clean()).collect()
    }

    /// Escalation note trimmed, or `None` when blank.
    pub fn escalation_note(&self) -> Option<&str> {
        non_blank(&self.escalation)
    }
}
