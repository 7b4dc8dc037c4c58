//! Values the page behaviors are parameterized by.
//!
//! There is no runtime configuration source; [`PageConfig::default`] carries
//! the markup contract from [`crate::constants`].

use crate::constants::{
    ANIMATED_SELECTORS, EMPTY_EMAIL_MESSAGE, PRE_ANIMATION_CLASS, REVEAL_THRESHOLD,
    THANK_YOU_PREFIX, THANK_YOU_SUFFIX, VISIBLE_CLASS,
};
use crate::error::{PageError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub animated_selectors: Vec<&'static str>,
    pub pre_animation_class: &'static str,
    pub visible_class: &'static str,
    pub reveal_threshold: f64,
    pub thank_you_prefix: &'static str,
    pub thank_you_suffix: &'static str,
    pub empty_email_message: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            animated_selectors: ANIMATED_SELECTORS.to_vec(),
            pre_animation_class: PRE_ANIMATION_CLASS,
            visible_class: VISIBLE_CLASS,
            reveal_threshold: REVEAL_THRESHOLD,
            thank_you_prefix: THANK_YOU_PREFIX,
            thank_you_suffix: THANK_YOU_SUFFIX,
            empty_email_message: EMPTY_EMAIL_MESSAGE,
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::InvalidThreshold(self.reveal_threshold));
        }
        if self.animated_selectors.is_empty() {
            return Err(PageError::EmptySelectorList);
        }
        log::debug!(
            "[config] threshold={} selectors={}",
            self.reveal_threshold,
            self.animated_selectors.len()
        );
        Ok(())
    }

    /// Selector group matching every animated block, for `querySelectorAll`.
    pub fn animated_selector(&self) -> String {
        self.animated_selectors.join(", ")
    }
}
