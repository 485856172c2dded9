//! Dual-timer synchronizer

use std::sync::Arc;

use kairos_clock::{SystemTimeSource, TimeSource, Timer};
use kairos_core::{KairosError, KairosResult, TimeUnit};

use crate::SyncAuthority;

/// Server-view and client-view timers driven by one authority round trip
///
/// The two timers share one raw time source but are otherwise independent.
/// Until the first successful `synchronize` both carry the identity
/// configuration, so every read is plain raw device time.
///
/// Overlapping `synchronize` calls are not serialized: each in-flight call
/// completes independently and the last configure wins. Callers that need
/// strict ordering must queue their calls.
pub struct Synchronizer<A> {
    server: Timer,
    client: Timer,
    authority: Option<A>,
    source: Arc<dyn TimeSource>,
}

impl<A: SyncAuthority> Synchronizer<A> {
    /// Create a synchronizer over the system wall clock
    ///
    /// Pass `None` for a synchronizer with no authority wired up; its
    /// `synchronize` fails fast and its timers stay on the identity
    /// configuration.
    pub fn new(authority: Option<A>) -> Self {
        Self::with_source(authority, Arc::new(SystemTimeSource))
    }

    /// Create a synchronizer over a caller-supplied raw time source
    pub fn with_source(authority: Option<A>, source: Arc<dyn TimeSource>) -> Self {
        Synchronizer {
            server: Timer::with_source(Arc::clone(&source)),
            client: Timer::with_source(Arc::clone(&source)),
            authority,
            source,
        }
    }

    /// Run one authority round trip and reconfigure both timers
    ///
    /// All-or-nothing: any failure (missing authority, authority error,
    /// invalid returned configuration) leaves both timers exactly as they
    /// were. Each individual configure is atomic with respect to readers.
    pub async fn synchronize(&self) -> KairosResult<()> {
        let authority = self
            .authority
            .as_ref()
            .ok_or(KairosError::AuthorityUnavailable)?;

        let client_timestamp = self.source.now_ms();
        let result = authority.request_sync(client_timestamp).await?;

        // Both derived configurations share the returned acceleration
        // factor, so one validation covers them and nothing is applied
        // past a rejection.
        result.timer.validate()?;

        // Positive delta: this device's raw clock is ahead of the server's.
        // Server view: raw time + canonical offset - delta, acceleration
        // starting at the server pivot shifted into client time.
        self.server.configure(
            result.timer.offset - result.delta,
            result.timer.acceleration_factor,
            result.timer.start_at + result.delta,
        )?;

        // Client view: same bend rules, canonical offset left unchanged.
        self.client.configure(
            result.timer.offset,
            result.timer.acceleration_factor,
            result.timer.start_at + result.delta,
        )?;

        tracing::debug!(delta = result.delta, "timers synchronized");

        Ok(())
    }

    /// Difference in msec between the client and server views
    pub fn offset(&self) -> i64 {
        self.client.offset() - self.server.offset()
    }

    /// Current time on the server's timeline
    pub fn now(&self, unit: TimeUnit) -> i64 {
        self.server.now(unit)
    }

    /// Current server time in milliseconds
    pub fn msec(&self) -> i64 {
        self.server.msec()
    }

    /// Current server time in whole seconds
    pub fn sec(&self) -> i64 {
        self.server.sec()
    }

    /// Current time on this device's own timeline
    pub fn client_now(&self, unit: TimeUnit) -> i64 {
        self.client.now(unit)
    }

    /// Re-express a device timestamp on the server's timeline
    pub fn translate_client_to_server(&self, timestamp: i64, unit: TimeUnit) -> i64 {
        self.server.translate(timestamp, unit)
    }

    /// Re-express an unbent server timestamp on this device's timeline
    pub fn translate_server_to_client(&self, timestamp: i64, unit: TimeUnit) -> i64 {
        self.client.translate(timestamp, unit)
    }

    /// Server-view timer
    pub fn server(&self) -> &Timer {
        &self.server
    }

    /// Client-view timer
    pub fn client(&self) -> &Timer {
        &self.client
    }
}
