//! Submission controller.
//!
//! One attempt moves `Idle -> Submitting -> Idle`. A successful attempt hands
//! back an empty record for the form to show; a failed one hands back the
//! record exactly as it was so the user can retry without retyping.

use std::cell::RefCell;

use crate::endpoint::{Delivery, EntryEndpoint};
use crate::error::{EntryError, EntryResult};
use crate::record::EntryRecord;
use crate::reference::ReferenceLists;

pub const SUCCESS_NOTICE: &str = "Data added successfully!";
pub const FAILURE_NOTICE: &str = "Error submitting data. Please try again.";

/// Result of one submission attempt.
///
/// `Unknown` is what a fire-and-forget write produces: no transport error,
/// but no acknowledgment from the endpoint either. Callers that need more
/// certainty can follow up with a read-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ack,
    Unknown,
    Failed(EntryError),
}

impl SubmitOutcome {
    /// Whether the form should treat the record as stored
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Ack | SubmitOutcome::Unknown)
    }

    /// Message shown to the user, if any
    pub fn notice(&self) -> Option<String> {
        match self {
            SubmitOutcome::Ack | SubmitOutcome::Unknown => Some(SUCCESS_NOTICE.to_string()),
            SubmitOutcome::Failed(EntryError::SubmissionInProgress) => None,
            SubmitOutcome::Failed(EntryError::MissingFields(fields)) => Some(format!(
                "Please fill in: {}",
                fields
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            SubmitOutcome::Failed(e) if e.is_transport() => Some(FAILURE_NOTICE.to_string()),
            // Caught before anything was sent; say what is wrong with the form.
            SubmitOutcome::Failed(e) => Some(e.to_string()),
        }
    }
}

impl From<EntryResult<Delivery>> for SubmitOutcome {
    fn from(result: EntryResult<Delivery>) -> Self {
        match result {
            Ok(Delivery::Acknowledged) => SubmitOutcome::Ack,
            Ok(Delivery::Opaque) => SubmitOutcome::Unknown,
            Err(e) => SubmitOutcome::Failed(e),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
}

/// Outcome plus the record the form should hold afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub outcome: SubmitOutcome,
    pub record: EntryRecord,
}

impl SubmissionReport {
    fn settle(outcome: SubmitOutcome, submitted: &EntryRecord) -> Self {
        let record = if outcome.is_success() {
            EntryRecord::default()
        } else {
            submitted.clone()
        };
        Self { outcome, record }
    }
}

/// Guards against overlapping writes and maps transport results to outcomes.
#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Enter `Submitting` if no write is in flight and the record is complete
    /// and consistent with the loaded reference lists.
    ///
    /// On error the phase is unchanged and nothing should be sent.
    pub fn begin(&mut self, record: &EntryRecord, lists: &ReferenceLists) -> EntryResult<()> {
        if self.is_submitting() {
            tracing::warn!("Submission ignored: another submission is in flight");
            return Err(EntryError::SubmissionInProgress);
        }
        record.ensure_complete()?;
        record.check_against(lists)?;
        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// Leave `Submitting` and decide what the form shows next.
    pub fn finish(
        &mut self,
        submitted: &EntryRecord,
        result: EntryResult<Delivery>,
    ) -> SubmissionReport {
        self.phase = SubmissionPhase::Idle;

        let outcome = SubmitOutcome::from(result);
        match &outcome {
            SubmitOutcome::Ack => tracing::info!("Entry stored and acknowledged"),
            SubmitOutcome::Unknown => {
                tracing::warn!("Entry sent; endpoint response is opaque, storage unconfirmed")
            }
            SubmitOutcome::Failed(e) => tracing::error!("Failed to submit entry: {}", e),
        }
        SubmissionReport::settle(outcome, submitted)
    }
}

/// Run one submission attempt: guard, one write, outcome.
///
/// The controller is borrowed only around `begin` and `finish`, never across
/// the write, so a second attempt made while one is in flight sees the
/// `Submitting` phase and is rejected instead of panicking on the borrow.
pub async fn submit<E: EntryEndpoint>(
    controller: &RefCell<SubmissionController>,
    endpoint: &E,
    record: &EntryRecord,
    lists: &ReferenceLists,
) -> SubmissionReport {
    let started = controller.borrow_mut().begin(record, lists);
    if let Err(e) = started {
        tracing::info!("Submission not sent: {}", e);
        return SubmissionReport::settle(SubmitOutcome::Failed(e), record);
    }

    tracing::info!(title = %record.title, date = %record.date, "Submitting entry");
    let result = endpoint.submit_entry(record).await;
    controller.borrow_mut().finish(record, result)
}
