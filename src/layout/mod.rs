//! Page layout for handover documents.
//!
//! [`layout_document`] turns a [`HandoverForm`](crate::HandoverForm) into a
//! [`RenderedDocument`](crate::model::RenderedDocument): pages of positioned
//! draw commands that the PDF writer serializes as-is.

mod engine;
mod metrics;
mod options;
mod profile;

pub use engine::{block_lines, layout_document, BlockKind, LayoutEngine, MORE_MARKER};
pub use metrics::text_width;
pub use options::{artifact_filename, format_timestamp, Branding, GenerateOptions, LayoutProfile};
pub use profile::{LineCaps, ProfileConfig, CONDENSED, DETAILED};
