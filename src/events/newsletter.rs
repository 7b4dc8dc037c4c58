use crate::constants::{EMAIL_INPUT_SELECTOR, NEWSLETTER_FORM_SELECTOR, SUBMIT};
use crate::dom;
use page_core::{evaluate_submission, PageConfig, PageError, SubmitOutcome};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercept the newsletter form's submit so it never navigates.
///
/// `notify` shows the outcome message; the page passes [`dom::alert`].
pub fn wire_newsletter_form(
    document: &web::Document,
    config: Rc<PageConfig>,
    notify: impl Fn(&str) + 'static,
) -> bool {
    let Some(form) = dom::query(document, NEWSLETTER_FORM_SELECTOR) else {
        log::debug!("[newsletter] no form, skipping");
        return false;
    };
    let target = form.clone();
    dom::add_listener(&form, SUBMIT, move |ev| {
        ev.prevent_default();
        match handle_submit(&target, &config, &notify) {
            Ok(outcome) => log::debug!("[newsletter] cleared={}", outcome.clears_input()),
            Err(e) => log::error!("[newsletter] {}", e),
        }
    });
    true
}

fn handle_submit(
    form: &web::Element,
    config: &PageConfig,
    notify: &dyn Fn(&str),
) -> page_core::Result<SubmitOutcome> {
    let input = dom::query_child(form, EMAIL_INPUT_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .ok_or(PageError::MissingElement {
            selector: EMAIL_INPUT_SELECTOR,
            context: NEWSLETTER_FORM_SELECTOR,
        })?;
    let outcome = evaluate_submission(&input.value(), config);
    notify(outcome.message());
    if outcome.clears_input() {
        input.set_value("");
    }
    Ok(outcome)
}
