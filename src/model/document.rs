//! Document-level types.

use super::{LogoImage, Page};
use chrono::NaiveDateTime;

/// A laid-out document: finished pages plus what the writer must embed.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Document information dictionary fields
    pub info: DocumentInfo,

    /// Pages in order
    pub pages: Vec<Page>,

    /// Decoded logo referenced by `DrawCommand::Logo`
    pub logo: Option<LogoImage>,
}

impl RenderedDocument {
    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// All text drawn anywhere in the document, page by page.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| page.texts())
    }
}

/// Document information written to the PDF Info dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title
    pub title: String,

    /// Producing application and version
    pub producer: String,

    /// Generation time
    pub created: NaiveDateTime,
}

impl DocumentInfo {
    /// `CreationDate` in PDF date syntax (`D:YYYYMMDDHHmmSS`).
    pub fn pdf_creation_date(&self) -> String {
        self.created.format("D:%Y%m%d%H%M%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Shift Handover".to_string(),
            producer: "Shift Handover Pro v1.0".to_string(),
            created: NaiveDate::from_ymd_opt(2026, 2, 4)
                .unwrap()
                .and_hms_opt(21, 5, 9)
                .unwrap(),
        }
    }

    #[test]
    fn test_pdf_creation_date() {
        assert_eq!(info().pdf_creation_date(), "D:20260204210509");
    }

    #[test]
    fn test_get_page() {
        let doc = RenderedDocument {
            info: info(),
            pages: vec![Page::a4(1), Page::a4(2)],
            logo: None,
        };
        assert_eq!(doc.page_count(), 2);
        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(2).map(|p| p.number), Some(2));
        assert!(doc.get_page(3).is_none());
    }
}
