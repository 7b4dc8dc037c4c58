use crate::constants::REVEAL_INDEX_ATTR;
use crate::dom;
use page_core::{PageConfig, RevealAction, RevealTracker, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tag every animated block with the pre-animation class and reveal each one
/// the first time enough of it scrolls into view. Returns the number of
/// blocks watched.
pub fn wire_scroll_reveal(document: &web::Document, config: &PageConfig) -> anyhow::Result<usize> {
    let mut tracker = RevealTracker::new(config)?;
    let elements = dom::query_all(document, &config.animated_selector());
    for (i, el) in elements.iter().enumerate() {
        _ = el.class_list().add_1(config.pre_animation_class);
        _ = el.set_attribute(REVEAL_INDEX_ATTR, &i.to_string());
        tracker.watch(i);
    }
    let tracker = Rc::new(RefCell::new(tracker));

    let visible_class = config.visible_class;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(idx) = reveal_index(&target) else {
                    continue;
                };
                let report = Visibility {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if tracker.borrow_mut().report(&idx, report) == RevealAction::RevealAndUnobserve {
                    _ = target.class_list().add_1(visible_class);
                    observer.unobserve(&target);
                    log::debug!(
                        "[reveal] block {} visible (ratio {:.2}), {} left",
                        idx,
                        report.ratio,
                        tracker.borrow().watched_len()
                    );
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();

    log::debug!("[reveal] watching {} blocks", elements.len());
    Ok(elements.len())
}

#[inline]
fn reveal_index(el: &web::Element) -> Option<usize> {
    el.get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()
}
