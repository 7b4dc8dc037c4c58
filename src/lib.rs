#![cfg(target_arch = "wasm32")]
use constants::DOM_CONTENT_LOADED;
use page_core::PageConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod constants;
pub mod dom;
pub mod events;
pub mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    // The module may finish loading after the document was parsed.
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run);
        document.add_event_listener_with_callback(DOM_CONTENT_LOADED, on_ready.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

// Each behavior is independent; a missing element only skips its own wiring.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = Rc::new(PageConfig::default());
    config.validate()?;
    log::info!("page interactions loaded and running");

    events::wire_like_buttons(&document);
    events::wire_mini_player(&document);
    if let Err(e) = reveal::wire_scroll_reveal(&document, &config) {
        log::error!("[reveal] {:?}", e);
    }
    events::wire_newsletter_form(&document, config, dom::alert);
    Ok(())
}
