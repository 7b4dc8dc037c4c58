/// Selectors the web adapters query the page with.
///
/// Class names and copy shared with the pure logic live in
/// `page_core::constants`.
pub const LIKE_BUTTON_SELECTOR: &str = ".like-button";
pub const ICON_SELECTOR: &str = "i";

pub const PLAYER_BUTTON_SELECTOR: &str =
    ".mini-player .player-controls button[aria-label=\"Play track\"]";

pub const NEWSLETTER_FORM_SELECTOR: &str = ".newsletter-form";
pub const EMAIL_INPUT_SELECTOR: &str = "input[type=\"email\"]";

// Event names
pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
pub const SUBMIT: &str = "submit";

// Position of an animated block in the reveal tracker
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
