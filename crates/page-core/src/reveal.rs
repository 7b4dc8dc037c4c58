//! One-shot reveal bookkeeping for scroll animations.
//!
//! Each watched element moves `Unseen -> Revealed` exactly once, the first
//! time a report shows it intersecting with at least the threshold fraction
//! on screen. After that it leaves the
//! watched set and later reports for it are ignored.

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::PageConfig;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unseen,
    Revealed,
}

/// What the adapter should do with an element after a visibility report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing.
    RevealAndUnobserve,
    Ignore,
}

/// A single intersection report as delivered by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl RevealState {
    /// The observer also reports plain `isIntersecting` changes (including
    /// the first notification after `observe`), so the ratio is checked too.
    pub fn step(self, report: Visibility, threshold: f64) -> (RevealState, RevealAction) {
        match self {
            RevealState::Revealed => (RevealState::Revealed, RevealAction::Ignore),
            RevealState::Unseen if report.is_intersecting && report.ratio >= threshold => {
                (RevealState::Revealed, RevealAction::RevealAndUnobserve)
            }
            RevealState::Unseen => (RevealState::Unseen, RevealAction::Ignore),
        }
    }
}

/// Reveal state for a set of elements keyed by `K`, mirroring the observer's
/// working set. The threshold is the one the observer is created with.
#[derive(Debug)]
pub struct RevealTracker<K> {
    threshold: f64,
    states: HashMap<K, RevealState>,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new(config: &PageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.reveal_threshold,
            states: HashMap::new(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `key`. Re-watching a revealed element does nothing.
    pub fn watch(&mut self, key: K) {
        self.states.entry(key).or_insert(RevealState::Unseen);
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn is_watched(&self, key: &K) -> bool {
        self.state(key) == Some(RevealState::Unseen)
    }

    /// Elements still waiting to be revealed.
    pub fn watched_len(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Unseen)
            .count()
    }

    pub fn report(&mut self, key: &K, report: Visibility) -> RevealAction {
        let Some(state) = self.states.get_mut(key) else {
            return RevealAction::Ignore;
        };
        let (next, action) = state.step(report, self.threshold);
        *state = next;
        action
    }
}
