//! Image XObjects for the header logo.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::error::Result;
use crate::model::LogoImage;

/// Resource name the page content uses for the logo.
pub const LOGO_RESOURCE: &str = "Im1";

/// Add the logo, and its soft mask when it has transparency, to `doc`.
pub fn embed_logo(doc: &mut Document, logo: &LogoImage) -> Result<ObjectId> {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(logo.width),
        "Height" => i64::from(logo.height),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };

    if let Some(alpha) = &logo.alpha {
        let smask = image_stream(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(logo.width),
                "Height" => i64::from(logo.height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            alpha,
        )?;
        let smask_id = doc.add_object(smask);
        dict.set("SMask", smask_id);
    }

    let image = image_stream(dict, &logo.rgb)?;
    Ok(doc.add_object(image))
}

fn image_stream(dict: lopdf::Dictionary, samples: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(samples)?;
    let compressed = encoder.finish()?;

    // Already deflated; keep Document::compress from touching it.
    Ok(Stream::new(dict, compressed).with_compression(false))
}

/// `cm` operands placing a unit image into `(x, y, width, height)`.
pub fn placement(x: f32, y: f32, width: f32, height: f32) -> Vec<Object> {
    vec![
        width.into(),
        0.into(),
        0.into(),
        height.into(),
        x.into(),
        y.into(),
    ]
}
