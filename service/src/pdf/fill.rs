//! Filling of contract templates with resolved field values.

use lopdf::{dictionary, Document, Object, ObjectId, StringFormat};
use tracing as log;

use crate::{
    domain::{CoExhibitor, Engagement, PaymentMode},
    fields::{self, contains_all_tokens, FieldValue, MappingContext},
};

use super::{
    appearance,
    form::{self, FieldFlavor, FormField},
    sanitize_text, Error,
};

/// Fills the participation contract template with values resolved from the
/// provided context and returns the flattened document bytes.
///
/// A field no tier resolves is left blank and logged; only a malformed
/// template or a drifted payment selector aborts the operation.
pub fn fill_contract(
    template: &[u8],
    ctx: &MappingContext<'_>,
) -> Result<Vec<u8>, Error> {
    let mut doc = Document::load_mem(template)?;
    let form_id = form::acro_form_id(&mut doc)?;
    form::strip_xfa_and_usage_rights(&mut doc, form_id)?;
    let font_id = appearance::ensure_helvetica(&mut doc, form_id)?;

    for field in form::collect_fields(&doc, form_id)? {
        let value = fields::resolve(&field.name, ctx);
        if value.is_none() {
            log::debug!(field = %field.name, "unresolved template field");
        }
        match field.flavor {
            FieldFlavor::Text => {
                if let Some(FieldValue::Text(text)) = value {
                    write_text(&mut doc, &field, &text, font_id)?;
                }
            }
            FieldFlavor::Checkbox => {
                if let Some(FieldValue::Flag(on)) = value {
                    set_checkbox(&mut doc, &field, on)?;
                } else {
                    payment_checkbox(&mut doc, &field, ctx.engagement)?;
                }
            }
            FieldFlavor::Radio => {
                select_payment_radio(&mut doc, &field, ctx.engagement)?;
            }
            FieldFlavor::PushButton
            | FieldFlavor::Choice
            | FieldFlavor::Other => {}
        }
    }

    appearance::flatten(&mut doc)?;

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

/// Fills the co-exhibitor annex template with a single co-exhibitor's
/// contacts and returns the flattened document bytes.
pub fn fill_co_exhibitor(
    template: &[u8],
    co: &CoExhibitor,
) -> Result<Vec<u8>, Error> {
    let mut doc = Document::load_mem(template)?;
    let form_id = form::acro_form_id(&mut doc)?;
    form::strip_xfa_and_usage_rights(&mut doc, form_id)?;
    let font_id = appearance::ensure_helvetica(&mut doc, form_id)?;

    for field in form::collect_fields(&doc, form_id)? {
        let value = match field.name.as_str() {
            "raison_social" => &co.company_name,
            "resp_nom" => &co.contact_last_name,
            "resp_prenom" => &co.contact_first_name,
            "resp_tel" => &co.contact_phone,
            "resp_mail" => &co.contact_email,
            _ => continue,
        };
        if field.flavor == FieldFlavor::Text && !value.is_empty() {
            write_text(&mut doc, &field, value, font_id)?;
        }
    }

    appearance::flatten(&mut doc)?;

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}

/// Latin-1 rendition of `text`, with unrepresentable characters degraded
/// to `?`.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Writes `text` as the field's value and regenerates an appearance for
/// every widget of the field, so the value survives flattening even when
/// the widgets are separate kid annotations.
fn write_text(
    doc: &mut Document,
    field: &FormField,
    text: &str,
    font_id: ObjectId,
) -> Result<(), Error> {
    let text = sanitize_text(text);

    for widget in form::field_widgets(doc, field.id) {
        let Some([_, _, width, height]) = appearance::widget_rect(doc, widget)
        else {
            continue;
        };
        let stream_id =
            appearance::text_appearance(doc, width, height, &text, font_id);
        doc.get_object_mut(widget)?
            .as_dict_mut()?
            .set("AP", dictionary! { "N" => Object::Reference(stream_id) });
    }

    doc.get_object_mut(field.id)?.as_dict_mut()?.set(
        "V",
        Object::String(latin1(&text), StringFormat::Literal),
    );
    Ok(())
}

fn set_checkbox(
    doc: &mut Document,
    field: &FormField,
    on: bool,
) -> Result<(), Error> {
    let state = if on {
        form::checkbox_on_state(doc, field.id)
    } else {
        b"Off".to_vec()
    };
    let dict = doc.get_object_mut(field.id)?.as_dict_mut()?;
    dict.set("V", Object::Name(state.clone()));
    dict.set("AS", Object::Name(state));
    Ok(())
}

/// Drives a checkbox named after a payment mode directly from the
/// engagement record.
fn payment_checkbox(
    doc: &mut Document,
    field: &FormField,
    engagement: &Engagement,
) -> Result<(), Error> {
    for mode in PaymentMode::ALL {
        if contains_all_tokens(&field.name, &[mode.export_value()]) {
            return set_checkbox(
                doc,
                field,
                engagement.payment_mode == mode,
            );
        }
    }
    Ok(())
}

/// Selects the engagement's payment mode in an exclusive-choice group.
///
/// The template's declared option set is validated against the
/// [`PaymentMode`] table up front: a payment selector missing a mode means
/// the template drifted, and silently producing a contract without a
/// selectable mode is worse than failing. Radio groups unrelated to
/// payment are left untouched.
fn select_payment_radio(
    doc: &mut Document,
    field: &FormField,
    engagement: &Engagement,
) -> Result<(), Error> {
    let declared = form::radio_export_values(doc, field.id);
    let named_like_payment = PaymentMode::ALL
        .iter()
        .any(|m| contains_all_tokens(&field.name, &[m.export_value()]));
    let declares_payment = PaymentMode::ALL
        .iter()
        .any(|m| declared.iter().any(|d| d == m.export_value()));
    if !named_like_payment && !declares_payment {
        return Ok(());
    }

    for mode in PaymentMode::ALL {
        if !declared.iter().any(|d| d == mode.export_value()) {
            return Err(Error::PaymentOptionsMismatch {
                expected: mode.export_value(),
                declared,
            });
        }
    }

    let chosen = engagement.payment_mode.export_value();
    doc.get_object_mut(field.id)?
        .as_dict_mut()?
        .set("V", Object::Name(chosen.into()));

    let widgets: Vec<_> = form::field_widgets(doc, field.id)
        .into_iter()
        .map(|widget| (widget, form::widget_on_state(doc, widget)))
        .collect();
    for (widget, state) in widgets {
        let dict = doc.get_object_mut(widget)?.as_dict_mut()?;
        match state {
            Some(state) if form::decode_pdf_string(&state) == chosen => {
                dict.set("AS", Object::Name(state));
            }
            Some(_) | None => {
                dict.set("AS", Object::Name(b"Off".to_vec()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod spec {
    use lopdf::Document;

    use crate::{
        catalog::Catalog,
        domain::{
            CoExhibitor, Engagement, Exhibitor, PaymentMode,
            SelectionSnapshot,
        },
        fields::MappingContext,
        pdf::testing::template,
        totals::compute_totals,
    };

    use super::{
        appearance, fill_co_exhibitor, fill_contract, form, write_text, Error,
    };

    fn sample_fill(template_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let exhibitor = Exhibitor {
            company_name: "Acme SAS".into(),
            association_member: true,
            ..Exhibitor::default()
        };
        let selection = SelectionSnapshot::default();
        let engagement = Engagement {
            payment_mode: PaymentMode::Transfer,
            ..Engagement::default()
        };
        let catalog = Catalog::current();
        let totals = compute_totals(&selection, &catalog);
        fill_contract(template_bytes, &MappingContext {
            exhibitor: &exhibitor,
            selection: &selection,
            engagement: &engagement,
            totals: &totals,
            catalog: &catalog,
            preview_all: false,
        })
    }

    #[test]
    fn fills_and_flattens_even_with_unresolved_fields() {
        let bytes = template(&["acompte", "solde", "virement"]);
        let out = sample_fill(&bytes).unwrap();
        assert!(!out.is_empty());

        let flattened = Document::load_mem(&out).unwrap();
        let root_id = flattened
            .trailer
            .get(b"Root")
            .unwrap()
            .as_reference()
            .unwrap();
        let root = flattened.get_object(root_id).unwrap().as_dict().unwrap();
        assert!(!root.has(b"AcroForm"));
    }

    #[test]
    fn drifted_payment_selector_fails_fast() {
        let bytes = template(&["acompte", "solde"]);
        let err = sample_fill(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::PaymentOptionsMismatch { expected: "virement", .. },
        ));
    }

    #[test]
    fn malformed_template_is_fatal() {
        assert!(matches!(
            sample_fill(b"not a pdf at all"),
            Err(Error::Malformed(_)),
        ));
    }

    #[test]
    fn kid_widget_text_fields_get_per_widget_appearances() {
        let bytes = template(&["acompte", "solde", "virement"]);
        let mut doc = Document::load_mem(&bytes).unwrap();
        let form_id = form::acro_form_id(&mut doc).unwrap();
        let font_id = appearance::ensure_helvetica(&mut doc, form_id).unwrap();
        let field = form::collect_fields(&doc, form_id)
            .unwrap()
            .into_iter()
            .find(|f| f.name == "adresse")
            .unwrap();

        write_text(&mut doc, &field, "1 rue des Forges", font_id).unwrap();

        let widgets = form::field_widgets(&doc, field.id);
        assert_eq!(widgets.len(), 2);
        for widget in widgets {
            let dict = doc.get_object(widget).unwrap().as_dict().unwrap();
            let normal = dict
                .get(b"AP")
                .unwrap()
                .as_dict()
                .unwrap()
                .get(b"N")
                .unwrap()
                .as_reference()
                .unwrap();
            let stream = doc.get_object(normal).unwrap();
            assert!(!stream
                .as_stream()
                .unwrap()
                .content
                .is_empty());
        }
    }

    #[test]
    fn co_exhibitor_annex_fills_contact_fields() {
        let bytes = template(&["acompte", "solde", "virement"]);
        let co = CoExhibitor {
            company_name: "Beta SARL".into(),
            contact_last_name: "Martin".into(),
            ..CoExhibitor::default()
        };
        let out = fill_co_exhibitor(&bytes, &co).unwrap();
        assert!(!out.is_empty());
    }
}
