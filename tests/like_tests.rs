// Host-side tests for the like toggle. A class set stands in for the icon;
// clicks go through the same `LikeState::on_click` the DOM handler uses.

use page_core::constants::{ICON_REGULAR_CLASS, ICON_SOLID_CLASS, LIKED_COLOR, UNLIKED_COLOR};
use page_core::{IconPatch, LikeState};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq)]
struct FakeIcon {
    classes: BTreeSet<&'static str>,
    color: Option<&'static str>,
}

impl FakeIcon {
    fn new(classes: &[&'static str]) -> Self {
        Self {
            classes: classes.iter().copied().collect(),
            color: None,
        }
    }

    fn apply(&mut self, patch: IconPatch) {
        self.classes.remove(patch.remove_class);
        self.classes.insert(patch.add_class);
        if let Some(c) = patch.color {
            self.color = Some(c);
        }
    }

    fn click(&mut self) -> LikeState {
        let (next, patch) = LikeState::on_click(self.classes.contains(ICON_SOLID_CLASS));
        self.apply(patch);
        next
    }
}

#[test]
fn first_click_on_unliked_icon_likes_it() {
    let mut icon = FakeIcon::new(&["fa-heart", ICON_REGULAR_CLASS]);
    assert_eq!(icon.click(), LikeState::Liked);
    assert!(icon.classes.contains(ICON_SOLID_CLASS));
    assert!(!icon.classes.contains(ICON_REGULAR_CLASS));
    assert!(icon.classes.contains("fa-heart"));
    assert_eq!(icon.color, Some(LIKED_COLOR));
}

#[test]
fn click_on_liked_icon_unlikes_it_with_muted_color() {
    let mut icon = FakeIcon::new(&["fa-heart", ICON_SOLID_CLASS]);
    assert_eq!(icon.click(), LikeState::Unliked);
    assert!(icon.classes.contains(ICON_REGULAR_CLASS));
    assert!(!icon.classes.contains(ICON_SOLID_CLASS));
    assert_eq!(icon.color, Some(UNLIKED_COLOR));
}

#[test]
fn even_clicks_restore_class_and_odd_clicks_flip_it() {
    for start in [ICON_REGULAR_CLASS, ICON_SOLID_CLASS] {
        let initial = LikeState::from_icon(start == ICON_SOLID_CLASS);
        let mut icon = FakeIcon::new(&["fa-heart", start]);
        for n in 1..=9 {
            let state = icon.click();
            let expected = if n % 2 == 0 { initial } else { initial.toggled() };
            assert_eq!(state, expected, "click {n} from {start}");
            assert!(icon.classes.contains(expected.icon_class()));
            assert!(!icon.classes.contains(expected.toggled().icon_class()));
            assert_eq!(icon.color, Some(expected.color()));
        }
    }
}

#[test]
fn toggled_is_an_involution() {
    for s in [LikeState::Liked, LikeState::Unliked] {
        assert_ne!(s.toggled(), s);
        assert_eq!(s.toggled().toggled(), s);
    }
}

#[test]
fn patch_swaps_mutually_exclusive_classes() {
    let liked = LikeState::Liked.patch();
    assert_eq!(liked.add_class, ICON_SOLID_CLASS);
    assert_eq!(liked.remove_class, ICON_REGULAR_CLASS);
    let unliked = LikeState::Unliked.patch();
    assert_eq!(unliked.add_class, ICON_REGULAR_CLASS);
    assert_eq!(unliked.remove_class, ICON_SOLID_CLASS);
}

#[test]
fn buttons_toggle_independently() {
    let mut a = FakeIcon::new(&[ICON_REGULAR_CLASS]);
    let b = FakeIcon::new(&[ICON_REGULAR_CLASS]);
    a.click();
    assert_eq!(a.color, Some(LIKED_COLOR));
    assert_eq!(b, FakeIcon::new(&[ICON_REGULAR_CLASS]));
}
