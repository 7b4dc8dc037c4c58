// Markup contract shared by the core and the web adapters.

// Like icon marker classes (Font Awesome solid / regular)
pub const ICON_SOLID_CLASS: &str = "fas";
pub const ICON_REGULAR_CLASS: &str = "far";

// Inline colors applied to the like icon
pub const LIKED_COLOR: &str = "var(--primary-yellow)";
pub const UNLIKED_COLOR: &str = "var(--text-muted)";

// Mini-player glyph classes
pub const GLYPH_PLAY_CLASS: &str = "fa-play";
pub const GLYPH_PAUSE_CLASS: &str = "fa-pause";

// Scroll reveal
pub const PRE_ANIMATION_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be on screen
pub const ANIMATED_SELECTORS: [&str; 4] = [
    ".podcast-card-large",
    ".upload-cta-section",
    ".episode-item",
    ".footer-content > div",
];

// Newsletter copy
pub const THANK_YOU_PREFIX: &str = "Obrigado por se inscrever, ";
pub const THANK_YOU_SUFFIX: &str = "!";
pub const EMPTY_EMAIL_MESSAGE: &str = "Por favor, insira um endereço de email válido.";
