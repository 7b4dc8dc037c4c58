use crate::constants::{ICON_SELECTOR, PLAYER_BUTTON_SELECTOR};
use crate::dom;
use page_core::constants::GLYPH_PAUSE_CLASS;
use page_core::{PageError, PlayerState};
use web_sys as web;

/// Wire the hero mini-player button if the page has one.
///
/// Only the icon changes; no media is played.
pub fn wire_mini_player(document: &web::Document) -> bool {
    let Some(button) = dom::query(document, PLAYER_BUTTON_SELECTOR) else {
        log::debug!("[player] no play button, skipping");
        return false;
    };
    let target = button.clone();
    dom::add_click_listener(&button, move || match toggle_player(&target) {
        Ok(state) => log::debug!("[player] now {:?}", state),
        Err(e) => log::error!("[player] {}", e),
    });
    true
}

// The icon is looked up per click; a button without one is reported, not repaired.
fn toggle_player(button: &web::Element) -> page_core::Result<PlayerState> {
    let icon = dom::query_child(button, ICON_SELECTOR).ok_or(PageError::MissingElement {
        selector: ICON_SELECTOR,
        context: PLAYER_BUTTON_SELECTOR,
    })?;
    let (next, patch) = PlayerState::on_click(icon.class_list().contains(GLYPH_PAUSE_CLASS));
    dom::apply_icon_patch(&icon, patch);
    Ok(next)
}
