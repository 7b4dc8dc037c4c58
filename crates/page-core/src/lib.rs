pub mod config;
pub mod constants;
pub mod error;
pub mod newsletter;
pub mod reveal;
pub mod toggle;

pub use config::*;
pub use error::*;
pub use newsletter::*;
pub use reveal::*;
pub use toggle::*;
