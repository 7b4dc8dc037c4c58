//! Newsletter submission outcome.

use crate::config::PageConfig;

/// What the submit handler should show, and whether to clear the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Subscribed { message: String },
    Rejected { message: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Subscribed { message } | SubmitOutcome::Rejected { message } => message,
        }
    }

    #[inline]
    pub fn clears_input(&self) -> bool {
        matches!(self, SubmitOutcome::Subscribed { .. })
    }
}

/// Any non-empty value is accepted; no address validation is done.
pub fn evaluate_submission(email: &str, config: &PageConfig) -> SubmitOutcome {
    if email.is_empty() {
        SubmitOutcome::Rejected {
            message: config.empty_email_message.to_string(),
        }
    } else {
        SubmitOutcome::Subscribed {
            message: format!(
                "{}{}{}",
                config.thank_you_prefix, email, config.thank_you_suffix
            ),
        }
    }
}
