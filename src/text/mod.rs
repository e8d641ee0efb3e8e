//! Free-text handling: line cleanup and fixed-column wrapping.

mod normalize;
mod wrap;

pub use normalize::{clean_lines, pick_items, NONE_TOKEN};
pub use wrap::wrap_text;
