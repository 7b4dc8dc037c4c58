//! Two-valued visual states and the class/style values they map to.
//!
//! The web layer reads the current state back from the icon's classes, asks
//! for the toggled state and applies [`IconPatch`] to the element. Nothing
//! here touches the DOM, so every transition is testable on the host.

use crate::constants::{
    GLYPH_PAUSE_CLASS, GLYPH_PLAY_CLASS, ICON_REGULAR_CLASS, ICON_SOLID_CLASS, LIKED_COLOR,
    UNLIKED_COLOR,
};

/// Class and inline color changes to apply to an icon element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconPatch {
    pub add_class: &'static str,
    pub remove_class: &'static str,
    pub color: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

impl LikeState {
    /// A solid icon means the control is liked.
    #[inline]
    pub fn from_icon(has_solid_class: bool) -> Self {
        if has_solid_class {
            LikeState::Liked
        } else {
            LikeState::Unliked
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LikeState::Liked => LikeState::Unliked,
            LikeState::Unliked => LikeState::Liked,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            LikeState::Liked => ICON_SOLID_CLASS,
            LikeState::Unliked => ICON_REGULAR_CLASS,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LikeState::Liked => LIKED_COLOR,
            LikeState::Unliked => UNLIKED_COLOR,
        }
    }

    /// Patch that renders `self` on an icon currently showing the other state.
    pub fn patch(self) -> IconPatch {
        IconPatch {
            add_class: self.icon_class(),
            remove_class: self.toggled().icon_class(),
            color: Some(self.color()),
        }
    }

    /// Click on an icon that does or does not carry the solid class.
    pub fn on_click(has_solid_class: bool) -> (LikeState, IconPatch) {
        let next = Self::from_icon(has_solid_class).toggled();
        (next, next.patch())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
}

impl PlayerState {
    /// A pause glyph is shown while the track is "playing".
    #[inline]
    pub fn from_glyph(shows_pause: bool) -> Self {
        if shows_pause {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            PlayerState::Playing => PlayerState::Paused,
            PlayerState::Paused => PlayerState::Playing,
        }
    }

    pub fn glyph_class(self) -> &'static str {
        match self {
            PlayerState::Playing => GLYPH_PAUSE_CLASS,
            PlayerState::Paused => GLYPH_PLAY_CLASS,
        }
    }

    pub fn patch(self) -> IconPatch {
        IconPatch {
            add_class: self.glyph_class(),
            remove_class: self.toggled().glyph_class(),
            color: None,
        }
    }

    pub fn on_click(shows_pause: bool) -> (PlayerState, IconPatch) {
        let next = Self::from_glyph(shows_pause).toggled();
        (next, next.patch())
    }
}
