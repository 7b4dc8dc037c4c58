use page_core::IconPatch;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `querySelector` on the document; an invalid selector counts as not found.
#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_child(parent: &web::Element, selector: &str) -> Option<web::Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Snapshot of `querySelectorAll`; later additions to the document are not seen.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_| handler());
}

pub fn apply_icon_patch(icon: &web::Element, patch: IconPatch) {
    let cl = icon.class_list();
    _ = cl.remove_1(patch.remove_class);
    _ = cl.add_1(patch.add_class);
    if let Some(color) = patch.color {
        if let Some(html) = icon.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("color", color);
        }
    }
}

/// Blocking `window.alert`.
#[inline]
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}
