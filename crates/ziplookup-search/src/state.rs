use std::fmt;

use ziplookup_core::ResultSet;

/// Sequence number of an accepted submission.
///
/// Allocated in strictly increasing order by one orchestrator; only the most
/// recent id may change state when its response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchId(u64);

impl SearchId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) const ZERO: SearchId = SearchId(0);
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated submission, ready to be sent to the Lookup Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    id: SearchId,
    raw_address: String,
}

impl SearchRequest {
    pub(crate) fn new(id: SearchId, raw_address: &str) -> Self {
        Self {
            id,
            raw_address: raw_address.to_owned(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SearchId {
        self.id
    }

    /// The address exactly as the user submitted it; this is the wire payload.
    #[must_use]
    pub fn raw_address(&self) -> &str {
        &self.raw_address
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Validating,
    Searching,
    Success(ResultSet),
    /// Holds the user-facing failure message.
    Failed(String),
}

impl SearchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Validating | SearchState::Searching)
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            SearchState::Success(results) => Some(results),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            SearchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            SearchState::Idle => "idle",
            SearchState::Validating => "validating",
            SearchState::Searching => "searching",
            SearchState::Success(_) => "success",
            SearchState::Failed(_) => "failed",
        }
    }
}
