//! Transport seam between the form logic and the remote endpoint.

use crate::error::EntryResult;
use crate::record::EntryRecord;
use crate::reference::ReferenceLists;

/// What the caller could observe about a write that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The endpoint answered with a readable success status
    Acknowledged,
    /// The response was opaque; nothing beyond "no transport error" is known
    Opaque,
}

/// The remote script that serves reference lists and stores records.
///
/// Both calls target the same configured URL. Futures are not required to be
/// `Send`: the form runs on the browser's single event loop.
#[allow(async_fn_in_trait)]
pub trait EntryEndpoint {
    /// GET the three reference lists.
    async fn fetch_reference_lists(&self) -> EntryResult<ReferenceLists>;

    /// POST one record as JSON.
    async fn submit_entry(&self, record: &EntryRecord) -> EntryResult<Delivery>;
}
