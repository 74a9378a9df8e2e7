//! Address-search request lifecycle.
//!
//! [`SearchOrchestrator`] validates raw input with the address parser, hands
//! out sequenced [`SearchRequest`]s for the caller to run against a
//! [`LookupService`], and applies only the response of the latest request.
//! User feedback goes through a [`Notifier`].

pub mod error;
pub mod lookup;
pub mod notify;
pub mod orchestrator;
pub mod state;

pub use error::SearchError;
pub use lookup::LookupService;
pub use notify::{MemoryNotifier, Notification, NotificationKind, Notifier, NotifyError};
pub use orchestrator::{RenderInput, SearchOrchestrator};
pub use state::{SearchId, SearchRequest, SearchState};
