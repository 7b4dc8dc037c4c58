use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// A control was found but a child it relies on was not.
    #[error("missing element `{selector}` inside {context}")]
    MissingElement {
        selector: &'static str,
        context: &'static str,
    },
    #[error("reveal threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
    #[error("no animated selectors configured")]
    EmptySelectorList,
}
