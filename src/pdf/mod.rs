//! PDF serialization.
//!
//! Pages are written with the two standard Helvetica faces, so no font
//! program is embedded. The only binary resource is the optional logo.

mod encoding;
mod logo;
mod writer;

pub use encoding::encode_win_ansi;
pub use writer::write_pdf;
