//! Appearance streams and form flattening.

use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::{form, Error};

/// Registers the Helvetica font every generated appearance uses, both as
/// its own object and in the form's default resources.
pub(crate) fn ensure_helvetica(
    doc: &mut Document,
    form_id: ObjectId,
) -> Result<ObjectId, Error> {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let fonts = dictionary! { "Helv" => Object::Reference(font_id) };
    let resources = dictionary! { "Font" => Object::Dictionary(fonts) };
    doc.get_object_mut(form_id)?
        .as_dict_mut()?
        .set("DR", Object::Dictionary(resources));
    Ok(font_id)
}

/// Widget rectangle as `[x, y, width, height]` in page space.
pub(crate) fn widget_rect(doc: &Document, id: ObjectId) -> Option<[f32; 4]> {
    let dict = doc.get_object(id).ok()?.as_dict().ok()?;
    let rect = form::deref(doc, dict.get(b"Rect").ok()?).as_array().ok()?;
    if rect.len() != 4 {
        return None;
    }
    let mut coords = [0.0f32; 4];
    for (slot, obj) in coords.iter_mut().zip(rect) {
        *slot = number(form::deref(doc, obj))?;
    }
    let [x1, y1, x2, y2] = coords;
    Some([x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs()])
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        #[expect(
            clippy::cast_precision_loss,
            reason = "page coordinates fit in `f32`"
        )]
        Object::Integer(i) => i32::try_from(*i).ok().map(|i| i as f32),
        Object::Real(r) => Some(*r),
        Object::Null
        | Object::Boolean(_)
        | Object::Name(_)
        | Object::String(..)
        | Object::Array(_)
        | Object::Dictionary(_)
        | Object::Stream(_)
        | Object::Reference(_) => None,
    }
}

/// Builds a normal appearance stream rendering `text` inside a widget of
/// the provided width and height, and returns its object ID.
pub(crate) fn text_appearance(
    doc: &mut Document,
    width: f32,
    height: f32,
    text: &str,
    font_id: ObjectId,
) -> ObjectId {
    let size = (height - 4.0).clamp(4.0, 9.0);
    let baseline = ((height - size) / 2.0).max(1.0);

    let mut content = Vec::new();
    content.extend_from_slice(b"/Tx BMC\nq\nBT\n");
    content.extend_from_slice(format!("/Helv {size:.2} Tf\n0 g\n").as_bytes());
    content.extend_from_slice(format!("2 {baseline:.2} Td\n(").as_bytes());
    content.extend_from_slice(&escape_win_ansi(text));
    content.extend_from_slice(b") Tj\nET\nQ\nEMC");

    let fonts = dictionary! { "Helv" => Object::Reference(font_id) };
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Form",
        "FormType" => 1,
        "BBox" => vec![
            0.into(),
            0.into(),
            Object::Real(width),
            Object::Real(height),
        ],
        "Resources" => dictionary! { "Font" => Object::Dictionary(fonts) },
    };
    doc.add_object(Object::Stream(Stream::new(dict, content)))
}

/// Encodes `text` as an escaped WinAnsi literal string body.
///
/// Characters outside Latin-1 degrade to `?`; the filler sanitizes the
/// common offenders beforehand.
fn escape_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let byte = if (c as u32) < 256 {
            #[expect(clippy::cast_possible_truncation, reason = "checked")]
            {
                c as u32 as u8
            }
        } else {
            b'?'
        };
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(byte),
        }
    }
    out
}

/// Stamps every widget's normal appearance into its page's content and
/// removes the interactive form, making the document non-editable.
pub(crate) fn flatten(doc: &mut Document) -> Result<(), Error> {
    let pages = doc.get_pages();
    let mut stamp_serial = 0u32;

    for (_, page_id) in pages {
        let widgets = page_widgets(doc, page_id)?;
        if widgets.is_empty() {
            continue;
        }

        let mut content = doc.get_page_content(page_id)?;
        for widget_id in widgets {
            let Some([x, y, width, height]) = widget_rect(doc, widget_id)
            else {
                continue;
            };
            let Some(stream_id) = normal_appearance_stream(doc, widget_id)
            else {
                continue;
            };
            promote_to_xobject(doc, stream_id, width, height)?;

            stamp_serial += 1;
            let name = format!("Flat{stamp_serial}");
            doc.add_xobject(page_id, name.as_bytes(), stream_id)?;
            content.extend_from_slice(
                format!("\nq\n1 0 0 1 {x:.2} {y:.2} cm\n/{name} Do\nQ\n")
                    .as_bytes(),
            );
        }
        doc.change_page_content(page_id, content)?;

        let _ = doc
            .get_object_mut(page_id)?
            .as_dict_mut()?
            .remove(b"Annots");
    }

    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    let _ = doc
        .get_object_mut(root_id)?
        .as_dict_mut()?
        .remove(b"AcroForm");
    Ok(())
}

/// Widget annotation IDs of a page, in declaration order.
fn page_widgets(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Vec<ObjectId>, Error> {
    let page = doc.get_object(page_id)?.as_dict()?;
    let Ok(annots) = page.get(b"Annots") else {
        return Ok(vec![]);
    };
    let Ok(annots) = form::deref(doc, annots).as_array() else {
        return Ok(vec![]);
    };

    Ok(annots
        .iter()
        .filter_map(|annot| annot.as_reference().ok())
        .filter(|&id| {
            doc.get_object(id)
                .ok()
                .and_then(|obj| obj.as_dict().ok())
                .and_then(|dict| dict.get(b"Subtype").ok())
                .and_then(|subtype| subtype.as_name().ok())
                .is_some_and(|name| name == b"Widget")
        })
        .collect())
}

/// ID of the appearance stream a widget currently displays: its normal
/// appearance, or the state matching `/AS` for stateful widgets.
fn normal_appearance_stream(
    doc: &mut Document,
    widget_id: ObjectId,
) -> Option<ObjectId> {
    enum Normal {
        Existing(ObjectId),
        Inline(Object),
    }

    let resolved = {
        let dict = doc.get_object(widget_id).ok()?.as_dict().ok()?;
        let normal_obj = form::deref(doc, dict.get(b"AP").ok()?)
            .as_dict()
            .ok()?
            .get(b"N")
            .ok()?;
        let selected = dict
            .get(b"AS")
            .ok()
            .and_then(|state| state.as_name().ok())
            .unwrap_or(b"Off");

        match form::deref(doc, normal_obj) {
            Object::Stream(_) => {
                // Reuse the referenced object, or give an inline stream
                // its own ID so it can be stamped as an XObject.
                if let Ok(id) = normal_obj.as_reference() {
                    Normal::Existing(id)
                } else {
                    Normal::Inline(normal_obj.clone())
                }
            }
            // Stateful widget: pick the stream of the current state.
            Object::Dictionary(states) => Normal::Existing(
                states.get(selected).ok()?.as_reference().ok()?,
            ),
            Object::Null
            | Object::Boolean(_)
            | Object::Integer(_)
            | Object::Real(_)
            | Object::Name(_)
            | Object::String(..)
            | Object::Array(_)
            | Object::Reference(_) => return None,
        }
    };

    match resolved {
        Normal::Existing(id) => Some(id),
        Normal::Inline(stream) => Some(doc.add_object(stream)),
    }
}

/// Makes sure the provided stream declares itself a Form XObject.
fn promote_to_xobject(
    doc: &mut Document,
    stream_id: ObjectId,
    width: f32,
    height: f32,
) -> Result<(), Error> {
    let Object::Stream(stream) = doc.get_object_mut(stream_id)? else {
        return Ok(());
    };
    stream.dict.set("Type", "XObject");
    stream.dict.set("Subtype", "Form");
    if !stream.dict.has(b"FormType") {
        stream.dict.set("FormType", 1);
    }
    if !stream.dict.has(b"BBox") {
        stream.dict.set(
            "BBox",
            vec![
                0.into(),
                0.into(),
                Object::Real(width),
                Object::Real(height),
            ],
        );
    }
    Ok(())
}

#[cfg(test)]
mod spec {
    use super::escape_win_ansi;

    #[test]
    fn escapes_string_delimiters() {
        assert_eq!(escape_win_ansi("a(b)c\\d"), b"a\\(b\\)c\\\\d".to_vec());
    }

    #[test]
    fn encodes_latin1_and_degrades_the_rest() {
        assert_eq!(escape_win_ansi("dé"), vec![b'd', 0xE9]);
        assert_eq!(escape_win_ansi("数"), vec![b'?']);
    }
}
