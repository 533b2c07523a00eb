//! Contact form: client-side validation only. A valid submission is announced
//! to assistive tech and the form resets after a short simulated delay; nothing
//! leaves the browser.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::schedule::after;
use super::{Page, listen, query_within, set_class, set_style};
use crate::config::TimingConfig;
use crate::error::Result;
use crate::validation::{FieldError, FieldKind, FormField, validate_form};

/// One `.form-group`: its control and its message slot.
struct Group {
    control: Element,
    message: Option<HtmlElement>,
}

fn read_field(index: usize, control: &Element) -> Option<FormField> {
    let min_len = control.get_attribute("minlength").and_then(|v| v.parse().ok());
    let name = control
        .get_attribute("name")
        .or_else(|| Some(control.id()).filter(|id| !id.is_empty()))
        .unwrap_or_else(|| format!("field{index}"));
    let (kind, value) = if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        (FieldKind::from_input_type(Some(input.type_().as_str())), input.value())
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        (FieldKind::Message, area.value())
    } else {
        return None;
    };
    Some(FormField { name, kind, min_len, value })
}

fn show(group: &Group, outcome: &std::result::Result<(), FieldError>) {
    let invalid = outcome.is_err();
    set_class(&group.control, "error", invalid);
    let _ = group.control.set_attribute("aria-invalid", if invalid { "true" } else { "false" });
    if let Some(msg) = &group.message {
        match outcome {
            Err(e) => {
                msg.set_text_content(Some(&e.to_string()));
                set_style(msg, "display", "block");
            }
            Ok(()) => {
                msg.set_text_content(Some(""));
                set_style(msg, "display", "none");
            }
        }
    }
}

/// Polite live-region message, removed again after `ms`.
pub fn announce(doc: &Document, message: &str, ms: u32) -> Result<()> {
    let Some(body) = doc.body() else { return Ok(()) };
    let note = doc.create_element("div")?;
    note.set_attribute("role", "status")?;
    note.set_attribute("aria-live", "polite")?;
    note.set_attribute("aria-atomic", "true")?;
    note.set_class_name("sr-only");
    note.set_text_content(Some(message));
    body.append_child(&note)?;
    after(ms, move || note.remove())
}

pub fn start(page: &Page, timing: &TimingConfig) -> Result<bool> {
    let Some(form) = page.contact_form.clone() else {
        return Ok(false);
    };
    let doc = page.document.clone();
    let (submit_ms, announce_ms) = (timing.submit_delay_ms, timing.announce_ms);
    let target = form.clone();
    listen(&target, "submit", move |evt: Event| {
        evt.prevent_default();
        let groups: Vec<Group> = query_within::<Element>(&form, ".form-group")
            .into_iter()
            .filter_map(|g| {
                let control = g.query_selector("input, textarea").ok().flatten()?;
                let message = g
                    .query_selector(".error-message")
                    .ok()
                    .flatten()
                    .and_then(|m| m.dyn_into::<HtmlElement>().ok());
                Some(Group { control, message })
            })
            .collect();
        let (groups, fields): (Vec<Group>, Vec<FormField>) = groups
            .into_iter()
            .enumerate()
            .filter_map(|(i, g)| read_field(i, &g.control).map(|f| (g, f)))
            .unzip();
        let report = validate_form(&fields);
        for (group, (_, outcome)) in groups.iter().zip(&report.results) {
            show(group, outcome);
        }
        if !report.is_valid() {
            log::debug!("contact form rejected: {} invalid fields", report.errors().count());
            return;
        }
        log::info!("contact form accepted ({} fields), not sent anywhere", fields.len());
        if let Err(e) = announce(&doc, "Form submitted successfully!", announce_ms) {
            log::warn!("could not announce submission: {e}");
        }
        let form: HtmlFormElement = form.clone();
        let _ = after(submit_ms, move || form.reset());
    })?;
    Ok(true)
}
