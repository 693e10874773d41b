//! Appearance stream synthesis for text field widgets.
//!
//! Produces the normal-appearance Form XObject for a `/FT /Tx` widget: a
//! content stream drawing the field's background and border in a local
//! coordinate box, followed by the `/Tx` marked-content bracket and inset
//! clip region some viewers require before they will render the field's
//! text layer as form content.
//!
//! The emitted token sequence is kept compatible with streams produced by
//! long-deployed form fillers, including two quirks preserved on purpose:
//! the border is drawn as 4x(b+1) overlapping unit-offset strokes rather
//! than one stroke of width b, and the trailing bracket pushes two graphics
//! states it never pops. Consumers of the historical output depend on both.

use crate::error::Result;
use crate::geometry::Rect;
use crate::object::{Object, ObjectRef};
use crate::writer::content_stream::{ContentStreamBuilder, ContentStreamOp};
use crate::writer::form_fields::style::{PaintColor, ResolvedStyle};
use std::collections::HashMap;

/// Marked-content tag for form-field text content.
const FIELD_TEXT_TAG: &str = "Tx";

/// Render the drawing-operator byte sequence for one appearance pass.
///
/// The rectangle is translated to a local origin; only its dimensions
/// matter here. Missing style inputs never fail; the only error path is
/// byte serialization of the composed stream, which aborts the render.
pub fn render_appearance_stream(rect: Rect, style: &ResolvedStyle) -> Result<Vec<u8>> {
    let (w, h) = (rect.width, rect.height);
    let mut builder = ContentStreamBuilder::new();

    // Background fill. No resolved paint means no fill operators at all;
    // the stream stays well-formed, just non-opaque.
    if let Some(color) = style.background {
        builder.op(fill_color_op(color));
        builder.rect(0.0, 0.0, w, h).fill();
    }

    // Border: b+1 concentric passes of four offset strokes each.
    let b = style.border_width;
    if b > 0 {
        if let Some(color) = style.border_color {
            builder.op(stroke_color_op(color));
        }
        for i in 0..=b {
            let off = i as f32;
            builder.stroke_line(w - off, 0.0, w - off, h);
            builder.stroke_line(off, 0.0, off, h);
            builder.stroke_line(0.0, off, w, off);
            builder.stroke_line(0.0, h - off, w, h - off);
        }
    }

    // Marked-content bracket with inset clip. The clip rectangle is
    // (b, b, W-2b, H-2b) and is serialized as-is even when the border
    // swallows the box and the dimensions go negative.
    let inset = b as f32;
    builder
        .begin_marked_content(FIELD_TEXT_TAG)
        .save_state()
        .end_path()
        .save_state()
        .rect(inset, inset, w - 2.0 * inset, h - 2.0 * inset)
        .clip()
        .end_path()
        .end_marked_content();

    builder.build()
}

/// Wrap a rendered content body as a Form XObject sized to the field box.
pub fn build_form_xobject(rect: Rect, content: Vec<u8>) -> Object {
    let mut dict = HashMap::new();
    dict.insert("Type".to_string(), Object::Name("XObject".to_string()));
    dict.insert("Subtype".to_string(), Object::Name("Form".to_string()));
    dict.insert("FormType".to_string(), Object::Integer(1));
    dict.insert(
        "BBox".to_string(),
        Object::Array(vec![
            Object::Real(0.0),
            Object::Real(0.0),
            Object::Real(rect.width as f64),
            Object::Real(rect.height as f64),
        ]),
    );
    dict.insert("Length".to_string(), Object::Integer(content.len() as i64));

    Object::Stream {
        dict,
        data: bytes::Bytes::from(content),
    }
}

/// Link a rendered stream under the widget's normal-appearance slot.
///
/// Creates the `/AP` dictionary if the widget has none (or replaces a
/// mistyped one), then overwrites `/N`. The previous reference, if any, is
/// discarded wholesale; links are never diffed or reused.
pub fn bind_normal_appearance(widget_dict: &mut HashMap<String, Object>, stream_ref: ObjectRef) {
    let ap = widget_dict
        .entry("AP".to_string())
        .or_insert_with(|| Object::Dictionary(HashMap::new()));
    if ap.as_dict_mut().is_none() {
        *ap = Object::Dictionary(HashMap::new());
    }
    if let Some(ap_dict) = ap.as_dict_mut() {
        ap_dict.insert("N".to_string(), Object::Reference(stream_ref));
    }
    log::debug!("bound normal appearance {}", stream_ref);
}

fn fill_color_op(color: PaintColor) -> ContentStreamOp {
    match color {
        PaintColor::Gray(g) => ContentStreamOp::SetFillColorGray(g),
        PaintColor::Rgb(r, g, b) => ContentStreamOp::SetFillColorRGB(r, g, b),
        PaintColor::Cmyk(c, m, y, k) => ContentStreamOp::SetFillColorCMYK(c, m, y, k),
    }
}

fn stroke_color_op(color: PaintColor) -> ContentStreamOp {
    match color {
        PaintColor::Gray(g) => ContentStreamOp::SetStrokeColorGray(g),
        PaintColor::Rgb(r, g, b) => ContentStreamOp::SetStrokeColorRGB(r, g, b),
        PaintColor::Cmyk(c, m, y, k) => ContentStreamOp::SetStrokeColorCMYK(c, m, y, k),
    }
}
