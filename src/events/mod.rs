pub mod like;
pub mod newsletter;
pub mod player;

pub use like::wire_like_buttons;
pub use newsletter::wire_newsletter_form;
pub use player::wire_mini_player;
