//! Per-profile layout constants.
//!
//! Both profiles run the same engine; everything that differs between the
//! multi-page and the one-page layout lives here. Lengths are millimetres
//! unless the field name says otherwise.

/// Maximum rendered lines per block before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCaps {
    pub incidents: usize,
    pub staffing: usize,
    pub residents: usize,
    pub tasks: usize,
    pub escalation: usize,
    pub briefing: usize,
}

/// Layout constants for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub margin_x: f32,
    pub margin_bottom: f32,

    // Full header band
    pub band_height: f32,
    pub logo_top: f32,
    pub logo_max_width: f32,
    pub logo_max_height: f32,
    /// Title shift to the right when a logo is drawn
    pub title_logo_offset: f32,
    pub title_suffix: &'static str,
    pub title_size: f32,
    pub title_baseline: f32,
    pub brand_size: f32,
    pub brand_baseline: f32,

    /// Top of the area/shift/generated strip below the band, if drawn
    pub info_strip_top: Option<f32>,
    /// Distance from the page top to the first block title on page one
    pub content_top: f32,

    // Blocks
    pub block_title_size: f32,
    pub block_title_gap: f32,
    pub body_size: f32,
    pub line_pitch: f32,
    /// Distance from the card top to the first text baseline
    pub first_baseline: f32,
    /// Card height not taken by lines
    pub card_padding: f32,
    pub text_inset: f32,
    pub block_gap: f32,
    pub card_radius_pt: f32,

    // Text shaping
    pub item_wrap_width: usize,
    /// Column width for notes blocks; `None` renders notes as items
    pub notes_wrap_width: Option<usize>,
    pub bullet: &'static str,
    pub continuation: &'static str,
    pub empty_placeholder: &'static str,
    pub notes_placeholder: &'static str,
    pub line_caps: Option<LineCaps>,

    // Footer
    pub footer_rule: f32,
    pub footer_timestamp: f32,
    pub footer_identity: f32,
    pub timestamp_size: f32,
    pub identity_size: f32,
    pub page_numbers: bool,

    // Pagination
    pub page_breaks: bool,
    /// Fixed part of the look-ahead height for a block
    pub break_base: f32,
    /// Per-line part of the look-ahead height for a block
    pub break_per_line: f32,
    /// Space kept free above the bottom margin for the footer
    pub footer_reserve: f32,

    // Compact header on continuation pages
    pub compact_height: f32,
    pub compact_baseline: f32,
    pub compact_content_top: f32,
}

/// Multi-page layout.
pub const DETAILED: ProfileConfig = ProfileConfig {
    margin_x: 16.0,
    margin_bottom: 16.0,

    band_height: 20.0,
    logo_top: 4.0,
    logo_max_width: 26.0,
    logo_max_height: 14.0,
    title_logo_offset: 30.0,
    title_suffix: "",
    title_size: 15.0,
    title_baseline: 13.5,
    brand_size: 10.0,
    brand_baseline: 13.3,

    info_strip_top: None,
    content_top: 28.0,

    block_title_size: 12.0,
    block_title_gap: 6.0,
    body_size: 10.8,
    line_pitch: 5.2,
    first_baseline: 11.2,
    card_padding: 12.0,
    text_inset: 7.0,
    block_gap: 8.0,
    card_radius_pt: 6.0,

    item_wrap_width: 92,
    notes_wrap_width: Some(100),
    bullet: "• ",
    continuation: "   ",
    empty_placeholder: "None reported.",
    notes_placeholder: "None.",
    line_caps: None,

    footer_rule: 12.0,
    footer_timestamp: 6.0,
    footer_identity: 2.5,
    timestamp_size: 8.8,
    identity_size: 8.3,
    page_numbers: true,

    page_breaks: true,
    break_base: 36.0,
    break_per_line: 5.4,
    footer_reserve: 20.0,

    compact_height: 10.0,
    compact_baseline: 7.0,
    compact_content_top: 20.0,
};

/// Single-page layout.
pub const CONDENSED: ProfileConfig = ProfileConfig {
    margin_x: 14.0,
    margin_bottom: 14.0,

    band_height: 16.0,
    logo_top: 3.0,
    logo_max_width: 22.0,
    logo_max_height: 12.0,
    title_logo_offset: 26.0,
    title_suffix: " (Condensed)",
    title_size: 13.0,
    title_baseline: 11.3,
    brand_size: 9.0,
    brand_baseline: 11.0,

    info_strip_top: Some(32.0),
    content_top: 48.0,

    block_title_size: 11.0,
    block_title_gap: 5.0,
    body_size: 9.8,
    line_pitch: 4.8,
    first_baseline: 6.0,
    card_padding: 8.0,
    text_inset: 6.0,
    block_gap: 6.0,
    card_radius_pt: 6.0,

    item_wrap_width: 95,
    notes_wrap_width: None,
    bullet: "- ",
    continuation: "  ",
    empty_placeholder: "- None.",
    notes_placeholder: "- None.",
    line_caps: Some(LineCaps {
        incidents: 6,
        staffing: 5,
        residents: 6,
        tasks: 6,
        escalation: 3,
        briefing: 2,
    }),

    footer_rule: 11.0,
    footer_timestamp: 6.0,
    footer_identity: 2.5,
    timestamp_size: 8.8,
    identity_size: 8.3,
    page_numbers: false,

    page_breaks: false,
    break_base: 0.0,
    break_per_line: 0.0,
    footer_reserve: 0.0,

    compact_height: 0.0,
    compact_baseline: 0.0,
    compact_content_top: 0.0,
};
