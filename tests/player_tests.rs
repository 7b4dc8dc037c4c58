// Host-side tests for the mini-player glyph toggle.

use page_core::constants::{GLYPH_PAUSE_CLASS, GLYPH_PLAY_CLASS};
use page_core::PlayerState;
use std::collections::BTreeSet;

fn click(classes: &mut BTreeSet<&'static str>) -> PlayerState {
    let (next, patch) = PlayerState::on_click(classes.contains(GLYPH_PAUSE_CLASS));
    classes.remove(patch.remove_class);
    classes.insert(patch.add_class);
    assert_eq!(patch.color, None);
    next
}

#[test]
fn play_glyph_switches_to_pause() {
    let mut icon: BTreeSet<_> = ["fas", GLYPH_PLAY_CLASS].into_iter().collect();
    assert_eq!(click(&mut icon), PlayerState::Playing);
    assert!(icon.contains(GLYPH_PAUSE_CLASS));
    assert!(!icon.contains(GLYPH_PLAY_CLASS));
    assert!(icon.contains("fas"));
}

#[test]
fn pause_glyph_switches_to_play() {
    let mut icon: BTreeSet<_> = ["fas", GLYPH_PAUSE_CLASS].into_iter().collect();
    assert_eq!(click(&mut icon), PlayerState::Paused);
    assert!(icon.contains(GLYPH_PLAY_CLASS));
    assert!(!icon.contains(GLYPH_PAUSE_CLASS));
}

#[test]
fn icon_without_pause_glyph_is_treated_as_paused() {
    // Neither glyph rendered: the first click shows pause
    let mut icon: BTreeSet<_> = ["fas"].into_iter().collect();
    assert_eq!(click(&mut icon), PlayerState::Playing);
    assert!(icon.contains(GLYPH_PAUSE_CLASS));
}

#[test]
fn repeated_clicks_strictly_alternate() {
    let mut icon: BTreeSet<_> = [GLYPH_PLAY_CLASS].into_iter().collect();
    let mut prev = PlayerState::from_glyph(false);
    for _ in 0..10 {
        let next = click(&mut icon);
        assert_ne!(next, prev);
        assert!(icon.contains(next.glyph_class()));
        assert_eq!(icon.len(), 1);
        prev = next;
    }
}
