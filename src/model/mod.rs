//! Document model types.
//!
//! Input types describe what the user typed into the handover form; output
//! types describe the laid-out pages handed to the PDF writer.

mod document;
mod form;
mod page;
mod resource;

pub use document::{DocumentInfo, RenderedDocument};
pub use form::{
    CleanedSection, DocumentMetadata, HandoverForm, Identity, Section, SectionKey, Sections,
};
pub(crate) use form::non_blank;
pub use page::{mm, Color, DrawCommand, Font, Page, Rect, PT_PER_MM};
pub use resource::LogoImage;

#[cfg(test)]
pub(crate) use resource::test_png;
