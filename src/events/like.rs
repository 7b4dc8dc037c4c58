use crate::constants::{ICON_SELECTOR, LIKE_BUTTON_SELECTOR};
use crate::dom;
use page_core::constants::ICON_SOLID_CLASS;
use page_core::{LikeState, PageError};
use web_sys as web;

/// Wire every like button present right now. Returns how many were wired.
pub fn wire_like_buttons(document: &web::Document) -> usize {
    let buttons = dom::query_all(document, LIKE_BUTTON_SELECTOR);
    for button in &buttons {
        let target = button.clone();
        dom::add_click_listener(button, move || match toggle_like(&target) {
            Ok(state) => log::debug!("[like] now {:?}", state),
            Err(e) => log::error!("[like] {}", e),
        });
    }
    log::debug!("[like] wired {} buttons", buttons.len());
    buttons.len()
}

fn toggle_like(button: &web::Element) -> page_core::Result<LikeState> {
    let icon = dom::query_child(button, ICON_SELECTOR).ok_or(PageError::MissingElement {
        selector: ICON_SELECTOR,
        context: LIKE_BUTTON_SELECTOR,
    })?;
    let (next, patch) = LikeState::on_click(icon.class_list().contains(ICON_SOLID_CLASS));
    dom::apply_icon_patch(&icon, patch);
    Ok(next)
}
