pub mod client;
pub mod error;
pub mod types;

pub use client::LookupClient;
pub use error::{request_failure_text, LookupError};
pub use types::{ErrorBody, LookupRequest};
