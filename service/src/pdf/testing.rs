//! Synthetic template documents for tests.

use lopdf::{dictionary, Document, Object, ObjectId, Stream};

fn blank_appearance(doc: &mut Document) -> ObjectId {
    doc.add_object(Object::Stream(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 10.into(), 10.into()],
        },
        Vec::new(),
    )))
}

/// Builds a one-page template with a merged-widget text field, a text
/// field carried by two kid widget annotations, a decorative text field
/// nothing resolves, a checkbox, and a payment radio group declaring the
/// provided export values.
pub(crate) fn template(radio_options: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut field_ids = Vec::new();
    let mut annot_ids = Vec::new();

    for (name, bottom) in [("raison_social", 700), ("champ_decoratif", 680)] {
        let id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::string_literal(name),
            "Rect" => vec![
                100.into(),
                bottom.into(),
                300.into(),
                (bottom + 15).into(),
            ],
        });
        field_ids.push(id);
        annot_ids.push(id);
    }

    // Text field split across two bare widget annotations.
    let mut address_kids = Vec::new();
    for bottom in [560, 540] {
        let appearance = blank_appearance(&mut doc);
        let kid = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "Rect" => vec![
                100.into(),
                bottom.into(),
                300.into(),
                (bottom + 15).into(),
            ],
            "AP" => dictionary! { "N" => Object::Reference(appearance) },
        });
        address_kids.push(kid);
        annot_ids.push(kid);
    }
    let address = doc.add_object(dictionary! {
        "FT" => "Tx",
        "T" => Object::string_literal("adresse"),
        "Kids" => address_kids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>(),
    });
    field_ids.push(address);

    let on = blank_appearance(&mut doc);
    let off = blank_appearance(&mut doc);
    let checkbox = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Widget",
        "FT" => "Btn",
        "T" => Object::string_literal("membre"),
        "Rect" => vec![100.into(), 650.into(), 110.into(), 660.into()],
        "AS" => "Off",
        "AP" => dictionary! {
            "N" => dictionary! {
                "Oui" => Object::Reference(on),
                "Off" => Object::Reference(off),
            },
        },
    });
    field_ids.push(checkbox);
    annot_ids.push(checkbox);

    let mut kids = Vec::new();
    for (i, option) in radio_options.iter().enumerate() {
        let on = blank_appearance(&mut doc);
        let off = blank_appearance(&mut doc);
        let y = 600 - i32::try_from(i).unwrap_or(0) * 20;
        let kid = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "Rect" => vec![
                100.into(),
                y.into(),
                110.into(),
                (y + 10).into(),
            ],
            "AS" => "Off",
            "AP" => dictionary! {
                "N" => dictionary! {
                    *option => Object::Reference(on),
                    "Off" => Object::Reference(off),
                },
            },
        });
        kids.push(kid);
        annot_ids.push(kid);
    }
    let radio = doc.add_object(dictionary! {
        "FT" => "Btn",
        "T" => Object::string_literal("mode_reglement"),
        "Ff" => Object::Integer(1 << 15),
        "Kids" => kids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>(),
    });
    field_ids.push(radio);

    let content_id = doc.add_object(Object::Stream(Stream::new(
        dictionary! {},
        Vec::new(),
    )));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {},
        "Annots" => annot_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>(),
    });
    let _ = doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let acro_form = doc.add_object(dictionary! {
        "Fields" => field_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect::<Vec<_>>(),
    });
    let catalog = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
        "AcroForm" => Object::Reference(acro_form),
    });
    doc.trailer.set("Root", catalog);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
