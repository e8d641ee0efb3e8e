//! Serialize a laid-out document with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::Result;
use crate::model::{Color, DrawCommand, Font, Page, Rect, RenderedDocument};

use super::encoding::encode_win_ansi;
use super::logo::{embed_logo, placement, LOGO_RESOURCE};

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.5523;

/// Write `document` as PDF bytes.
///
/// Output depends only on the input: the creation date comes from the
/// document info, and no file identifier is written.
pub fn write_pdf(document: &RenderedDocument) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(type1_font("Helvetica"));
    let bold_id = doc.add_object(type1_font("Helvetica-Bold"));

    let mut resources = dictionary! {
        "Font" => dictionary! {
            font_resource(Font::Helvetica) => regular_id,
            font_resource(Font::HelveticaBold) => bold_id,
        },
    };
    if let Some(logo) = &document.logo {
        let logo_id = embed_logo(&mut doc, logo)?;
        resources.set("XObject", dictionary! { LOGO_RESOURCE => logo_id });
    }
    let resources_id = doc.add_object(resources);

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    let has_logo = document.logo.is_some();
    for page in &document.pages {
        let content = Content {
            operations: page_operations(page, has_logo),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let media_box: Vec<Object> =
            vec![0.into(), 0.into(), page.width.into(), page.height.into()];
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = add_info(&mut doc, document);

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    log::debug!(
        "Wrote PDF: {} page(s), {} bytes",
        document.pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn type1_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn font_resource(font: Font) -> &'static str {
    match font {
        Font::Helvetica => "F1",
        Font::HelveticaBold => "F2",
    }
}

fn add_info(doc: &mut Document, document: &RenderedDocument) -> ObjectId {
    let info = &document.info;
    doc.add_object(dictionary! {
        "Title" => literal(&info.title),
        "Creator" => literal(&info.producer),
        "Producer" => literal(&info.producer),
        "CreationDate" => literal(&info.pdf_creation_date()),
    })
}

fn literal(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

fn page_operations(page: &Page, has_logo: bool) -> Vec<Operation> {
    let mut ops = Vec::new();
    for command in &page.commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                ops.push(fill_color(*color));
                ops.push(rect_op(rect));
                ops.push(Operation::new("f", vec![]));
            }
            DrawCommand::Card {
                rect,
                radius,
                fill,
                stroke,
                line_width,
            } => {
                ops.push(fill_color(*fill));
                ops.push(stroke_color(*stroke));
                ops.push(Operation::new("w", vec![(*line_width).into()]));
                rounded_rect(&mut ops, rect, *radius);
                ops.push(Operation::new("B", vec![]));
            }
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                line_width,
            } => {
                ops.push(stroke_color(*color));
                ops.push(Operation::new("w", vec![(*line_width).into()]));
                ops.push(Operation::new("m", vec![(*x1).into(), (*y1).into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), (*y2).into()]));
                ops.push(Operation::new("S", vec![]));
            }
            DrawCommand::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![Object::Name(font_resource(*font).into()), (*size).into()],
                ));
                ops.push(fill_color(*color));
                ops.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                ops.push(Operation::new("Tj", vec![literal(text)]));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawCommand::Logo { rect } => {
                if !has_logo {
                    continue;
                }
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new(
                    "cm",
                    placement(rect.x, rect.y, rect.width, rect.height),
                ));
                ops.push(Operation::new(
                    "Do",
                    vec![Object::Name(LOGO_RESOURCE.into())],
                ));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

fn fill_color(color: Color) -> Operation {
    Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()])
}

fn stroke_color(color: Color) -> Operation {
    Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()])
}

fn rect_op(rect: &Rect) -> Operation {
    Operation::new(
        "re",
        vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ],
    )
}

/// Closed path of a rectangle with quarter-circle corners.
fn rounded_rect(ops: &mut Vec<Operation>, rect: &Rect, radius: f32) {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    if r == 0.0 {
        ops.push(rect_op(rect));
        return;
    }

    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width, rect.top());
    let k = r * KAPPA;

    let point = |op: &str, coords: &[f32]| {
        Operation::new(op, coords.iter().map(|&v| v.into()).collect())
    };

    ops.push(point("m", &[x0 + r, y0]));
    ops.push(point("l", &[x1 - r, y0]));
    ops.push(point("c", &[x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r]));
    ops.push(point("l", &[x1, y1 - r]));
    ops.push(point("c", &[x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1]));
    ops.push(point("l", &[x0 + r, y1]));
    ops.push(point("c", &[x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r]));
    ops.push(point("l", &[x0, y0 + r]));
    ops.push(point("c", &[x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0]));
    ops.push(Operation::new("h", vec![]));
}
