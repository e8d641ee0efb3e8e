//! Generation options and configuration.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::profile::{ProfileConfig, CONDENSED, DETAILED};

/// Which page layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutProfile {
    /// Multi-page layout with every line and page numbers
    #[default]
    Detailed,
    /// Single page with per-block line caps
    Condensed,
}

impl LayoutProfile {
    /// Lowercase name used in file names and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            LayoutProfile::Detailed => "detailed",
            LayoutProfile::Condensed => "condensed",
        }
    }

    /// Layout constants for this profile.
    pub fn config(self) -> &'static ProfileConfig {
        match self {
            LayoutProfile::Detailed => &DETAILED,
            LayoutProfile::Condensed => &CONDENSED,
        }
    }
}

impl fmt::Display for LayoutProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(LayoutProfile::Detailed),
            "condensed" => Ok(LayoutProfile::Condensed),
            other => Err(Error::InvalidInput(format!("unknown layout profile: {}", other))),
        }
    }
}

/// Product identity printed in headers and footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Product name, also the header fallback when no organisation is set
    pub product_name: String,

    /// Product version (e.g. "v1.0")
    pub product_version: String,

    /// Support contact shown in the footer, if any
    pub support_contact: Option<String>,

    /// Document title in the header band
    pub document_title: String,
}

impl Branding {
    /// Create branding with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the support contact.
    pub fn with_support_contact(mut self, contact: impl Into<String>) -> Self {
        self.support_contact = Some(contact.into());
        self
    }

    /// Set the product name and version.
    pub fn with_product(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.product_name = name.into();
        self.product_version = version.into();
        self
    }

    /// Set the header title.
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Footer identity line: `"<product> <version>[ • Support: <contact>]"`.
    pub fn identity_line(&self) -> String {
        let mut line = format!("{} {}", self.product_name, self.product_version);
        if let Some(contact) = self.support_contact.as_deref().filter(|c| !c.trim().is_empty()) {
            line.push_str(" • Support: ");
            line.push_str(contact.trim());
        }
        line
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            product_name: "Shift Handover Pro".to_string(),
            product_version: "v1.0".to_string(),
            support_contact: None,
            document_title: "Shift Handover".to_string(),
        }
    }
}

/// Options for generating a handover document.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Page layout
    pub profile: LayoutProfile,

    /// Generation timestamp; the local clock is read when unset
    pub generated_at: Option<NaiveDateTime>,

    /// Header and footer identity
    pub branding: Branding,
}

impl GenerateOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout profile.
    pub fn with_profile(mut self, profile: LayoutProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Pin the generation timestamp.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    /// Set branding.
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    /// The pinned timestamp, or the current local time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.generated_at
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// Human-readable timestamp used in every output (e.g. "04 Feb 2026, 21:10").
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%d %b %Y, %H:%M").to_string()
}

/// Suggested download name: `<doctype>_<profile>[_printsafe]_<YYYYMMDD_HHMM>.pdf`.
pub fn artifact_filename(
    doctype: &str,
    profile: LayoutProfile,
    print_safe: bool,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{}_{}{}_{}.pdf",
        doctype,
        profile.name(),
        if print_safe { "_printsafe" } else { "" },
        timestamp.format("%Y%m%d_%H%M")
    )
}
