//! Text outputs derived from a handover form: the briefing sentence and the
//! Markdown, JSON and plain text summaries.

mod briefing;
mod json;
mod markdown;
mod text;

pub use briefing::{briefing_sentence, BRIEFING_ITEMS};
pub use json::{to_json, JsonFormat, SummaryJson};
pub use markdown::to_markdown;
pub use text::to_text;
