pub mod sheets;

use async_trait::async_trait;

use crate::models::BookingRecord;

/// Result of a phone-number search against the store. Decoded at the
/// boundary so callers can tell "no such booking" from a transport failure
/// (the latter is the trait method's `Err`).
#[derive(Debug)]
pub enum LookupOutcome {
    Found(BookingRecord),
    /// Store reachable, no matching record. Carries the store's own message
    /// when it sent one.
    NotFound(Option<String>),
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Mirror a submitted booking into the external store. The endpoint's
    /// response is not required to be readable; success here means the
    /// request was handed to the transport, not that the row is durable.
    async fn add_booking(&self, record: &BookingRecord) -> anyhow::Result<()>;

    /// Single search round trip keyed by phone number. No caching, no retry.
    async fn find_by_phone(&self, phone: &str) -> anyhow::Result<LookupOutcome>;
}
