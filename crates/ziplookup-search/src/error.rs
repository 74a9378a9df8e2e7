use thiserror::Error;
use ziplookup_client::{request_failure_text, LookupError};
use ziplookup_core::AddressError;

/// Why a search ended in [`crate::SearchState::Failed`].
///
/// `Display` is the text shown to the user. Stale responses are not errors
/// and never become a `SearchError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Malformed address, caught before any request is made.
    #[error(transparent)]
    Validation(#[from] AddressError),

    /// The Lookup Service answered with a non-2xx status.
    #[error("{}", request_failure_text(.status, .message.as_deref()))]
    Request {
        status: u16,
        message: Option<String>,
    },

    /// No usable response: network failure, timeout or unreadable body.
    #[error("{0}")]
    Transport(String),
}

impl SearchError {
    /// `true` for failures worth a warn-level log line.
    #[must_use]
    pub fn is_service_fault(&self) -> bool {
        !matches!(self, SearchError::Validation(_))
    }
}

impl From<LookupError> for SearchError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::RequestFailed { status, message } => {
                SearchError::Request { status, message }
            }
            other => SearchError::Transport(other.to_string()),
        }
    }
}
