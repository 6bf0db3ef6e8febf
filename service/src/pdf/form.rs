//! Enumeration of AcroForm fields inside a template document.

use lopdf::{Dictionary, Document, Object, ObjectId};

use super::Error;

/// Kind of a template form field, as declared by the template itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldFlavor {
    /// Free-text field.
    Text,

    /// Binary on/off field.
    Checkbox,

    /// Exclusive-choice group of widgets.
    Radio,

    /// Push button, never carries a value.
    PushButton,

    /// List or combo box.
    Choice,

    /// Anything else.
    Other,
}

/// Single form field found in a template.
#[derive(Clone, Debug)]
pub struct FormField {
    /// Object ID of the field dictionary.
    pub id: ObjectId,

    /// Fully qualified field name, dot-separated.
    pub name: String,

    /// Declared kind of the field.
    pub flavor: FieldFlavor,
}

/// Follows a reference one level deep, leaving direct objects untouched.
pub(crate) fn deref<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    obj.as_reference()
        .ok()
        .and_then(|id| doc.get_object(id).ok())
        .unwrap_or(obj)
}

/// Decodes a PDF text string: UTF-16BE when BOM-prefixed, Latin-1
/// otherwise.
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// Returns the ID of the document's AcroForm dictionary.
///
/// An inline (non-referenced) AcroForm is moved into its own object first,
/// so callers can always mutate it through the ID.
pub(crate) fn acro_form_id(doc: &mut Document) -> Result<ObjectId, Error> {
    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    let form = doc
        .get_object(root_id)?
        .as_dict()?
        .get(b"AcroForm")
        .map_err(|_| Error::MissingForm)?;
    if let Ok(id) = form.as_reference() {
        return Ok(id);
    }
    let inline = form.as_dict()?.clone();
    let id = doc.add_object(Object::Dictionary(inline));
    doc.get_object_mut(root_id)?
        .as_dict_mut()?
        .set("AcroForm", Object::Reference(id));
    Ok(id)
}

/// Collects every terminal form field of the document.
pub(crate) fn collect_fields(
    doc: &Document,
    form_id: ObjectId,
) -> Result<Vec<FormField>, Error> {
    let form = doc.get_object(form_id)?.as_dict()?;
    let fields = deref(doc, form.get(b"Fields")?).as_array()?;

    let mut out = Vec::new();
    for field in fields {
        walk(doc, field.as_reference()?, "", None, &mut out)?;
    }
    Ok(out)
}

fn walk(
    doc: &Document,
    id: ObjectId,
    prefix: &str,
    inherited_ft: Option<&[u8]>,
    out: &mut Vec<FormField>,
) -> Result<(), Error> {
    let dict = doc.get_object(id)?.as_dict()?;

    let partial = dict
        .get(b"T")
        .ok()
        .map(|t| deref(doc, t))
        .and_then(|t| t.as_str().ok())
        .map(decode_pdf_string);
    let name = match &partial {
        Some(part) if prefix.is_empty() => part.clone(),
        Some(part) => format!("{prefix}.{part}"),
        None => prefix.to_owned(),
    };

    let ft = dict
        .get(b"FT")
        .ok()
        .and_then(|o| deref(doc, o).as_name().ok())
        .or(inherited_ft);

    // Kids carrying their own partial names are child fields; bare kids
    // are widget annotations of this terminal field.
    if let Ok(kids) = deref(doc, dict.get(b"Kids").unwrap_or(&Object::Null))
        .as_array()
    {
        let has_child_fields = kids.iter().any(|kid| {
            kid.as_reference()
                .ok()
                .and_then(|kid_id| doc.get_object(kid_id).ok())
                .and_then(|obj| obj.as_dict().ok())
                .is_some_and(|d| d.has(b"T"))
        });
        if has_child_fields {
            for kid in kids {
                walk(doc, kid.as_reference()?, &name, ft, out)?;
            }
            return Ok(());
        }
    }

    if let Some(ft) = ft {
        out.push(FormField {
            id,
            name,
            flavor: flavor_of(ft, field_flags(doc, dict)),
        });
    }
    Ok(())
}

fn field_flags(doc: &Document, dict: &Dictionary) -> i64 {
    dict.get(b"Ff")
        .ok()
        .and_then(|o| deref(doc, o).as_i64().ok())
        .unwrap_or(0)
}

fn flavor_of(ft: &[u8], flags: i64) -> FieldFlavor {
    const PUSH_BUTTON: i64 = 1 << 16;
    const RADIO: i64 = 1 << 15;
    match ft {
        b"Tx" => FieldFlavor::Text,
        b"Ch" => FieldFlavor::Choice,
        b"Btn" if flags & PUSH_BUTTON != 0 => FieldFlavor::PushButton,
        b"Btn" if flags & RADIO != 0 => FieldFlavor::Radio,
        b"Btn" => FieldFlavor::Checkbox,
        _ => FieldFlavor::Other,
    }
}

/// Returns the "on" appearance state of a checkbox widget, `Yes` when the
/// widget declares none.
pub(crate) fn checkbox_on_state(doc: &Document, id: ObjectId) -> Vec<u8> {
    widget_on_state(doc, id).unwrap_or_else(|| b"Yes".to_vec())
}

pub(crate) fn widget_on_state(doc: &Document, id: ObjectId) -> Option<Vec<u8>> {
    let dict = doc.get_object(id).ok()?.as_dict().ok()?;
    let ap = deref(doc, dict.get(b"AP").ok()?);
    let normal = deref(doc, ap.as_dict().ok()?.get(b"N").ok()?);
    let states = normal.as_dict().ok()?;
    states
        .iter()
        .map(|(key, _)| key)
        .find(|key| key.as_slice() != b"Off")
        .cloned()
}

/// Widget annotation IDs of a terminal field.
///
/// A field merged with its single widget yields just its own ID.
pub(crate) fn field_widgets(doc: &Document, id: ObjectId) -> Vec<ObjectId> {
    let kids = doc
        .get_object(id)
        .ok()
        .and_then(|obj| obj.as_dict().ok())
        .and_then(|dict| dict.get(b"Kids").ok())
        .map(|kids| deref(doc, kids))
        .and_then(|kids| kids.as_array().ok());
    match kids {
        Some(kids) => kids
            .iter()
            .filter_map(|kid| kid.as_reference().ok())
            .collect(),
        None => vec![id],
    }
}

/// Option export values declared by an exclusive-choice group, in widget
/// order.
pub(crate) fn radio_export_values(doc: &Document, id: ObjectId) -> Vec<String> {
    field_widgets(doc, id)
        .into_iter()
        .filter_map(|widget| widget_on_state(doc, widget))
        .map(|state| decode_pdf_string(&state))
        .collect()
}

/// Drops XFA payloads and usage-rights signatures the template may carry,
/// so viewers rely on the AcroForm dictionary alone.
pub(crate) fn strip_xfa_and_usage_rights(
    doc: &mut Document,
    form_id: ObjectId,
) -> Result<(), Error> {
    {
        let form = doc.get_object_mut(form_id)?.as_dict_mut()?;
        let _ = form.remove(b"XFA");
        form.set("NeedAppearances", false);
    }

    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    let perms_id = doc
        .get_object(root_id)?
        .as_dict()?
        .get(b"Perms")
        .ok()
        .and_then(|p| p.as_reference().ok());
    if let Some(perms_id) = perms_id {
        let perms = doc.get_object_mut(perms_id)?.as_dict_mut()?;
        let _ = perms.remove(b"UR");
        let _ = perms.remove(b"UR3");
        if perms.is_empty() {
            let _ = doc
                .get_object_mut(root_id)?
                .as_dict_mut()?
                .remove(b"Perms");
        }
    }
    Ok(())
}

#[cfg(test)]
mod spec {
    use super::{decode_pdf_string, flavor_of, FieldFlavor};

    #[test]
    fn decodes_utf16be_and_latin1_strings() {
        assert_eq!(
            decode_pdf_string(&[0xFE, 0xFF, 0x00, 0x74, 0x00, 0xE9]),
            "té",
        );
        assert_eq!(decode_pdf_string(b"raison_social"), "raison_social");
        assert_eq!(decode_pdf_string(&[0x74, 0xE9, 0x6C]), "tél");
    }

    #[test]
    fn classifies_button_fields_by_flags() {
        assert_eq!(flavor_of(b"Tx", 0), FieldFlavor::Text);
        assert_eq!(flavor_of(b"Btn", 0), FieldFlavor::Checkbox);
        assert_eq!(flavor_of(b"Btn", 1 << 15), FieldFlavor::Radio);
        assert_eq!(flavor_of(b"Btn", 1 << 16), FieldFlavor::PushButton);
        assert_eq!(flavor_of(b"Ch", 0), FieldFlavor::Choice);
        assert_eq!(flavor_of(b"Sig", 0), FieldFlavor::Other);
    }
}
