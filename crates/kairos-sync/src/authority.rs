//! The external time authority capability

use kairos_core::{KairosResult, SyncResult};

/// One asynchronous round trip to the time authority
///
/// `client_timestamp_ms` is the raw device time captured when the request
/// was issued; the authority measures `delta` against it. Implementations
/// surface their own timeouts and transport failures as errors - the
/// synchronizer forwards them untouched and never retries.
#[allow(async_fn_in_trait)]
pub trait SyncAuthority {
    async fn request_sync(&self, client_timestamp_ms: i64) -> KairosResult<SyncResult>;
}
