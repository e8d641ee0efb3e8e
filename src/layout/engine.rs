//! Paginated layout engine.
//!
//! One [`LayoutEngine`] lives for exactly one generation request. It owns
//! the vertical cursor, the page being drawn and the finished pages:
//!
//! 1. [`LayoutEngine::new`] opens page one and draws the full header.
//! 2. [`LayoutEngine::draw_block`] lays out one titled card, breaking to a
//!    new page first when the look-ahead height does not fit.
//! 3. [`LayoutEngine::finish`] stamps the footer on the last page and
//!    consumes the engine, so nothing can be drawn after close.

use chrono::NaiveDateTime;

use crate::model::{
    mm, non_blank, Color, DocumentInfo, DocumentMetadata, DrawCommand, Font, HandoverForm,
    LogoImage, Page, Rect, RenderedDocument, SectionKey,
};
use crate::summary::briefing_sentence;
use crate::text::{clean_lines, wrap_text};

use super::metrics::text_width;
use super::options::{format_timestamp, Branding, GenerateOptions, LayoutProfile};
use super::profile::ProfileConfig;

const BRAND_DARK: Color = Color::from_hex(0x0F172A);
const TEXT_DARK: Color = Color::from_hex(0x0F172A);
const TEXT_MUTED: Color = Color::from_hex(0x475569);
const BORDER: Color = Color::from_hex(0xCBD5E1);
const BG_SOFT: Color = Color::from_hex(0xF1F5F9);

/// Marker appended to a truncated block.
pub const MORE_MARKER: &str = "(more in app)";

const DASH: &str = "—";
const BORDER_WIDTH: f32 = 1.0;

/// A titled card in the document, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// One of the free-text sections
    Section(SectionKey),
    /// The escalation note
    Escalation,
    /// The briefing sentence
    Briefing,
}

impl BlockKind {
    /// Every block in drawing order.
    pub const ORDER: [BlockKind; 6] = [
        BlockKind::Section(SectionKey::Incidents),
        BlockKind::Section(SectionKey::Staffing),
        BlockKind::Section(SectionKey::Residents),
        BlockKind::Section(SectionKey::Tasks),
        BlockKind::Escalation,
        BlockKind::Briefing,
    ];

    /// Card title.
    pub fn title(self) -> &'static str {
        match self {
            BlockKind::Section(key) => key.title(),
            BlockKind::Escalation => "Escalation / Notes",
            BlockKind::Briefing => "SBAR one-liner",
        }
    }

    fn is_notes(self) -> bool {
        !matches!(self, BlockKind::Section(_))
    }

    fn line_cap(self, config: &ProfileConfig) -> Option<usize> {
        let caps = config.line_caps?;
        Some(match self {
            BlockKind::Section(SectionKey::Incidents) => caps.incidents,
            BlockKind::Section(SectionKey::Staffing) => caps.staffing,
            BlockKind::Section(SectionKey::Residents) => caps.residents,
            BlockKind::Section(SectionKey::Tasks) => caps.tasks,
            BlockKind::Escalation => caps.escalation,
            BlockKind::Briefing => caps.briefing,
        })
    }
}

/// Lay out a handover form into pages of draw commands.
///
/// The timestamp is read once from `options` and used for every
/// header, footer and the document info.
pub fn layout_document(form: &HandoverForm, options: &GenerateOptions) -> RenderedDocument {
    let timestamp = options.timestamp();
    let briefing = briefing_sentence(form);

    let mut engine = LayoutEngine::new(
        &form.metadata,
        &options.branding,
        options.profile,
        timestamp,
    );

    for kind in BlockKind::ORDER {
        let raw = match kind {
            BlockKind::Section(key) => form.sections.get(key),
            BlockKind::Escalation => form.escalation.as_str(),
            BlockKind::Briefing => briefing.as_str(),
        };
        let lines = block_lines(kind, raw, options.profile.config());
        engine.draw_block(kind.title(), &lines);
    }

    engine.finish()
}

/// Rendered lines of one block, after wrapping, placeholders and caps.
pub fn block_lines(kind: BlockKind, raw: &str, config: &ProfileConfig) -> Vec<String> {
    let mut lines = match config.notes_wrap_width {
        Some(width) if kind.is_notes() => note_lines(raw, width, config.notes_placeholder),
        _ => item_lines(raw, config),
    };

    if let Some(cap) = kind.line_cap(config) {
        if lines.len() > cap {
            lines.truncate(cap);
            lines.push(MORE_MARKER.to_string());
        }
    }

    lines
}

fn item_lines(raw: &str, config: &ProfileConfig) -> Vec<String> {
    let items = clean_lines(raw);
    if items.is_empty() {
        return vec![config.empty_placeholder.to_string()];
    }

    let mut lines = Vec::new();
    for item in &items {
        for (i, line) in wrap_text(item, config.item_wrap_width).into_iter().enumerate() {
            let prefix = if i == 0 { config.bullet } else { config.continuation };
            lines.push(format!("{}{}", prefix, line));
        }
    }
    lines
}

fn note_lines(raw: &str, width: usize, placeholder: &str) -> Vec<String> {
    match non_blank(raw) {
        Some(note) => wrap_text(note, width),
        None => vec![placeholder.to_string()],
    }
}

/// Per-request layout state.
pub struct LayoutEngine<'a> {
    config: &'static ProfileConfig,
    metadata: &'a DocumentMetadata,
    branding: &'a Branding,
    timestamp: NaiveDateTime,
    generated_at: String,
    logo: Option<LogoImage>,
    pages: Vec<Page>,
    page: Page,
    /// Baseline of the next block title, in points from the page bottom
    cursor: f32,
    overflow_logged: bool,
}

impl<'a> LayoutEngine<'a> {
    /// Open page one and draw the full header.
    pub fn new(
        metadata: &'a DocumentMetadata,
        branding: &'a Branding,
        profile: LayoutProfile,
        timestamp: NaiveDateTime,
    ) -> Self {
        let logo = metadata.logo.as_deref().and_then(LogoImage::decode);
        let page = Page::a4(1);
        let cursor = page.height;

        let mut engine = Self {
            config: profile.config(),
            metadata,
            branding,
            timestamp,
            generated_at: format_timestamp(timestamp),
            logo,
            pages: Vec::new(),
            page,
            cursor,
            overflow_logged: false,
        };
        engine.draw_full_header();
        log::debug!("Started {} layout", profile);
        engine
    }

    /// Draw one titled card with the given, already wrapped, lines.
    pub fn draw_block(&mut self, title: &str, lines: &[String]) {
        let cfg = self.config;

        if cfg.page_breaks {
            let required = mm(cfg.break_base + lines.len() as f32 * cfg.break_per_line);
            if self.cursor - required < self.footer_limit() {
                self.break_page();
                if self.cursor - required < self.footer_limit() {
                    log::warn!(
                        "Block '{}' ({} lines) is taller than a page and will overflow",
                        title,
                        lines.len()
                    );
                }
            }
        }

        let width = self.page.width;
        let left = mm(cfg.margin_x);
        let content_width = width - 2.0 * left;

        self.text(left, self.cursor, Font::HelveticaBold, cfg.block_title_size, TEXT_DARK, title);
        self.cursor -= mm(cfg.block_title_gap);

        let card_height = mm(cfg.card_padding + lines.len() as f32 * cfg.line_pitch);
        self.page.push(DrawCommand::Card {
            rect: Rect::new(left, self.cursor - card_height, content_width, card_height),
            radius: cfg.card_radius_pt,
            fill: Color::WHITE,
            stroke: BORDER,
            line_width: BORDER_WIDTH,
        });

        let text_x = left + mm(cfg.text_inset);
        let mut baseline = self.cursor - mm(cfg.first_baseline);
        for line in lines {
            self.text(text_x, baseline, Font::Helvetica, cfg.body_size, TEXT_DARK, line);
            baseline -= mm(cfg.line_pitch);
        }

        let card_bottom = self.cursor - card_height;
        self.cursor = card_bottom - mm(cfg.block_gap);

        let footer_top = mm(cfg.margin_bottom + cfg.footer_rule);
        if !cfg.page_breaks && card_bottom < footer_top && !self.overflow_logged {
            log::warn!("Single-page layout ran into the footer area at '{}'", title);
            self.overflow_logged = true;
        }
    }

    /// Stamp the footer on the last page and return the finished document.
    pub fn finish(mut self) -> RenderedDocument {
        self.draw_footer();
        self.pages.push(self.page);
        log::debug!("Layout finished with {} page(s)", self.pages.len());

        RenderedDocument {
            info: DocumentInfo {
                title: self.branding.document_title.clone(),
                producer: format!(
                    "{} {}",
                    self.branding.product_name, self.branding.product_version
                ),
                created: self.timestamp,
            },
            pages: self.pages,
            logo: self.logo,
        }
    }

    fn footer_limit(&self) -> f32 {
        mm(self.config.margin_bottom + self.config.footer_reserve)
    }

    fn break_page(&mut self) {
        self.draw_footer();
        let next = Page::a4(self.page.number + 1);
        let finished = std::mem::replace(&mut self.page, next);
        self.pages.push(finished);
        log::debug!("Page break before page {}", self.page.number);
        self.draw_compact_header();
    }

    fn draw_full_header(&mut self) {
        let cfg = self.config;
        let (width, height) = (self.page.width, self.page.height);
        let left = mm(cfg.margin_x);
        let band = mm(cfg.band_height);

        self.page.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, height - band, width, band),
            color: BRAND_DARK,
        });

        let mut title_x = left;
        if let Some(logo) = &self.logo {
            let (w, h) = logo.fit_within(mm(cfg.logo_max_width), mm(cfg.logo_max_height));
            let top = height - mm(cfg.logo_top);
            self.page.push(DrawCommand::Logo {
                rect: Rect::new(left, top - h, w, h),
            });
            title_x += mm(cfg.title_logo_offset);
        }

        let title = format!("{}{}", self.branding.document_title, cfg.title_suffix);
        self.text(
            title_x,
            height - mm(cfg.title_baseline),
            Font::HelveticaBold,
            cfg.title_size,
            Color::WHITE,
            &title,
        );

        let brand = non_blank(&self.metadata.organization)
            .unwrap_or(&self.branding.product_name)
            .to_string();
        self.text_right(
            width - left,
            height - mm(cfg.brand_baseline),
            Font::Helvetica,
            cfg.brand_size,
            Color::WHITE,
            &brand,
        );

        if let Some(strip_top) = cfg.info_strip_top {
            self.draw_info_strip(height - mm(strip_top));
        }

        self.cursor = height - mm(cfg.content_top);
    }

    fn draw_info_strip(&mut self, top: f32) {
        let cfg = self.config;
        let left = mm(cfg.margin_x);
        let content_width = self.page.width - 2.0 * left;
        let strip = mm(10.0);
        let baseline = top - mm(6.6);

        self.page.push(DrawCommand::FillRect {
            rect: Rect::new(left, top - strip, content_width, strip),
            color: BG_SOFT,
        });

        let area = format!("Area: {}", self.metadata.area_or(DASH));
        let shift = format!("Shift: {}", self.metadata.shift);
        let generated = format!("Generated: {}", self.generated_at);
        self.text(left + mm(4.0), baseline, Font::HelveticaBold, 9.0, TEXT_DARK, &area);
        self.text(left + mm(70.0), baseline, Font::HelveticaBold, 9.0, TEXT_DARK, &shift);
        self.text_right(
            self.page.width - left - mm(4.0),
            baseline,
            Font::Helvetica,
            9.0,
            TEXT_DARK,
            &generated,
        );
    }

    fn draw_compact_header(&mut self) {
        let cfg = self.config;
        let (width, height) = (self.page.width, self.page.height);
        let left = mm(cfg.margin_x);
        let strip = mm(cfg.compact_height);
        let baseline = height - mm(cfg.compact_baseline);

        self.page.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, height - strip, width, strip),
            color: BG_SOFT,
        });

        let title = self.branding.document_title.clone();
        self.text(left, baseline, Font::HelveticaBold, 10.0, TEXT_DARK, &title);

        let context = format!(
            "{} • {} • {}",
            self.metadata.area_or(DASH),
            self.metadata.shift,
            self.generated_at
        );
        self.text_right(width - left, baseline, Font::Helvetica, 9.0, TEXT_MUTED, &context);

        self.cursor = height - mm(cfg.compact_content_top);
    }

    fn draw_footer(&mut self) {
        let cfg = self.config;
        let width = self.page.width;
        let left = mm(cfg.margin_x);
        let right = width - left;
        let bottom = mm(cfg.margin_bottom);

        let rule_y = bottom + mm(cfg.footer_rule);
        self.page.push(DrawCommand::Line {
            x1: left,
            y1: rule_y,
            x2: right,
            y2: rule_y,
            color: BORDER,
            line_width: BORDER_WIDTH,
        });

        let stamp_y = bottom + mm(cfg.footer_timestamp);
        let generated = format!("Generated: {}", self.generated_at);
        self.text(left, stamp_y, Font::Helvetica, cfg.timestamp_size, TEXT_MUTED, &generated);
        if cfg.page_numbers {
            let page_label = format!("Page {}", self.page.number);
            self.text_right(right, stamp_y, Font::Helvetica, cfg.timestamp_size, TEXT_MUTED, &page_label);
        }

        let identity_y = bottom + mm(cfg.footer_identity);
        let identity_line = self.branding.identity_line();
        self.text(left, identity_y, Font::Helvetica, cfg.identity_size, TEXT_MUTED, &identity_line);

        let metadata = self.metadata;
        let identity = metadata.identity();
        if identity.has_review() {
            let review = format!(
                "Reviewed by: {} • {}",
                identity.reviewed_by.unwrap_or(DASH),
                identity.review_date.unwrap_or(DASH)
            );
            self.text_right(right, identity_y, Font::Helvetica, cfg.identity_size, TEXT_MUTED, &review);
        }
    }

    fn text(&mut self, x: f32, y: f32, font: Font, size: f32, color: Color, text: &str) {
        self.page.push(DrawCommand::Text {
            x,
            y,
            font,
            size,
            color,
            text: text.to_string(),
        });
    }

    fn text_right(&mut self, right: f32, y: f32, font: Font, size: f32, color: Color, text: &str) {
        let x = right - text_width(font, size, text);
        self.text(x, y, font, size, color, text);
    }
}
