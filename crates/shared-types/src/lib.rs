//! Types and rules behind the calendar entry form.
//!
//! Everything here is independent of the browser: the record being edited,
//! the reference lists for its selectors, the date rule for unknown years,
//! and the submission controller. The frontend supplies an
//! [`EntryEndpoint`] and renders the state.

pub mod date_rule;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod record;
pub mod reference;
pub mod submission;

pub use date_rule::SENTINEL_YEAR;
pub use endpoint::{Delivery, EntryEndpoint};
pub use error::{EntryError, EntryResult};
pub use form::FieldEdit;
pub use record::{EntryRecord, Field};
pub use reference::{load_reference_lists, ReferenceKind, ReferenceLists, SelectOption};
pub use submission::{
    submit, SubmissionController, SubmissionPhase, SubmissionReport, SubmitOutcome, FAILURE_NOTICE,
    SUCCESS_NOTICE,
};
