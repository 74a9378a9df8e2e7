use std::future::Future;

use ziplookup_client::{LookupClient, LookupError};
use ziplookup_core::ResultSet;

/// Remote ZIP-code lookup.
///
/// Implemented by [`LookupClient`]; tests substitute scripted doubles.
pub trait LookupService {
    fn lookup(
        &self,
        raw_address: &str,
    ) -> impl Future<Output = Result<ResultSet, LookupError>> + Send;
}

impl LookupService for LookupClient {
    async fn lookup(&self, raw_address: &str) -> Result<ResultSet, LookupError> {
        LookupClient::lookup(self, raw_address).await
    }
}
