//! Page-level types: fixed-size canvases holding draw commands.

use serde::{Deserialize, Serialize};

/// Points per millimetre (1 point = 1/72 inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// White.
    pub const WHITE: Color = Color::from_hex(0xFFFFFF);

    /// Build a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

/// The two standard fonts used by every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// An axis-aligned rectangle in PDF user space (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// A single drawing operation on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    /// A filled rectangle without border
    FillRect { rect: Rect, color: Color },

    /// A filled, stroked rectangle with rounded corners
    Card {
        rect: Rect,
        radius: f32,
        fill: Color,
        stroke: Color,
        line_width: f32,
    },

    /// A straight line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        line_width: f32,
    },

    /// A single line of text with its baseline starting at `(x, y)`
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Color,
        text: String,
    },

    /// The document logo scaled into `rect`
    Logo { rect: Rect },
}

impl DrawCommand {
    /// Text content, if this is a text command.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Check if this command draws a card.
    pub fn is_card(&self) -> bool {
        matches!(self, DrawCommand::Card { .. })
    }
}

/// A single page in the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Draw commands in paint order
    pub commands: Vec<DrawCommand>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, mm(210.0), mm(297.0))
    }

    /// Append a draw command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// All text drawn on the page, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Check whether any text command equals `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }

    /// Number of cards on the page.
    pub fn card_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_card()).count()
    }

    /// Check if the page has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_a4() {
        let page = Page::a4(1);
        assert_eq!(page.number, 1);
        assert!((page.width - 595.2756).abs() < 0.01);
        assert!((page.height - 841.8898).abs() < 0.01);
        assert!(page.is_empty());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF0000);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(Color::WHITE, Color { r: 1.0, g: 1.0, b: 1.0 });
    }

    #[test]
    fn test_page_texts() {
        let mut page = Page::a4(1);
        page.push(DrawCommand::Text {
            x: 0.0,
            y: 0.0,
            font: Font::Helvetica,
            size: 10.0,
            color: Color::WHITE,
            text: "hello".to_string(),
        });
        page.push(DrawCommand::Card {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            radius: 6.0,
            fill: Color::WHITE,
            stroke: Color::WHITE,
            line_width: 1.0,
        });
        assert!(page.has_text("hello"));
        assert!(!page.has_text("hell"));
        assert_eq!(page.card_count(), 1);
    }
}
