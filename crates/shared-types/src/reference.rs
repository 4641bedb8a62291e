//! Reference lists that populate the form's selectors.
//!
//! The lists are owned by the remote endpoint, fetched once when the form
//! mounts and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::endpoint::EntryEndpoint;
use crate::record::Field;

/// Option lists returned by the endpoint's read request.
///
/// All three keys are required; a body missing any of them is a decode error,
/// never a partial load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLists {
    pub occasions: Vec<String>,
    pub relationships: Vec<String>,
    pub groups: Vec<String>,
}

/// Which reference list backs a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Occasion,
    Relationship,
    Group,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Occasion,
        ReferenceKind::Relationship,
        ReferenceKind::Group,
    ];

    /// Label of the empty option shown before anything is picked
    pub fn placeholder(&self) -> &'static str {
        match self {
            ReferenceKind::Occasion => "Select Occasion",
            ReferenceKind::Relationship => "Select Relationship",
            ReferenceKind::Group => "Select Group",
        }
    }

    /// Record field the selector writes to
    pub fn field(&self) -> Field {
        match self {
            ReferenceKind::Occasion => Field::Occasion,
            ReferenceKind::Relationship => Field::Relationship,
            ReferenceKind::Group => Field::Group,
        }
    }
}

/// One `<option>` of a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl ReferenceLists {
    pub fn options(&self, kind: ReferenceKind) -> &[String] {
        match kind {
            ReferenceKind::Occasion => &self.occasions,
            ReferenceKind::Relationship => &self.relationships,
            ReferenceKind::Group => &self.groups,
        }
    }

    /// Placeholder followed by every list entry, in list order.
    pub fn select_options(&self, kind: ReferenceKind) -> Vec<SelectOption> {
        let placeholder = SelectOption {
            value: String::new(),
            label: kind.placeholder().to_string(),
        };

        std::iter::once(placeholder)
            .chain(self.options(kind).iter().map(|option| SelectOption {
                value: option.clone(),
                label: option.clone(),
            }))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.occasions.is_empty() && self.relationships.is_empty() && self.groups.is_empty()
    }
}

/// Fetch the reference lists once.
///
/// Failures are logged and yield empty lists; the selectors then only show
/// their placeholders until the page is reloaded.
pub async fn load_reference_lists<E: EntryEndpoint>(endpoint: &E) -> ReferenceLists {
    match endpoint.fetch_reference_lists().await {
        Ok(lists) => {
            if lists.is_empty() {
                tracing::warn!("Reference lists are empty; selectors only offer placeholders");
            }
            tracing::info!(
                occasions = lists.occasions.len(),
                relationships = lists.relationships.len(),
                groups = lists.groups.len(),
                "Loaded reference lists"
            );
            lists
        }
        Err(e) => {
            tracing::error!("Failed to fetch reference lists: {}", e);
            ReferenceLists::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::testing::FakeEndpoint;
    use crate::error::EntryError;

    #[test]
    fn test_deserialize_response() {
        let lists: ReferenceLists = serde_json::from_str(
            r#"{"occasions":["Birthday"],"relationships":["Friend"],"groups":["Close"]}"#,
        )
        .unwrap();
        assert_eq!(lists.occasions, vec!["Birthday"]);
        assert_eq!(lists.relationships, vec!["Friend"]);
        assert_eq!(lists.groups, vec!["Close"]);
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        let partial = serde_json::from_str::<ReferenceLists>(r#"{"occasions":["Birthday"]}"#);
        assert!(partial.is_err());

        let script_error = serde_json::from_str::<ReferenceLists>(r#"{"error":"script failed"}"#);
        assert!(script_error.is_err());
    }

    #[test]
    fn test_select_options_single_entry_plus_placeholder() {
        let lists = ReferenceLists {
            occasions: vec!["Birthday".to_string()],
            relationships: vec!["Friend".to_string()],
            groups: vec!["Close".to_string()],
        };

        for (kind, expected) in [
            (ReferenceKind::Occasion, "Birthday"),
            (ReferenceKind::Relationship, "Friend"),
            (ReferenceKind::Group, "Close"),
        ] {
            let options = lists.select_options(kind);
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].value, "");
            assert_eq!(options[0].label, kind.placeholder());
            assert_eq!(options[1].value, expected);
        }
    }

    #[test]
    fn test_empty_lists_only_have_placeholder() {
        let lists = ReferenceLists::default();
        assert!(lists.is_empty());
        let options = lists.select_options(ReferenceKind::Group);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Select Group");
    }

    #[test]
    fn test_load_reference_lists_success() {
        let endpoint = FakeEndpoint::with_lists(ReferenceLists {
            occasions: vec!["Birthday".to_string()],
            relationships: vec!["Friend".to_string()],
            groups: vec!["Close".to_string()],
        });

        let lists = tokio_test::block_on(load_reference_lists(&endpoint));
        assert_eq!(lists.occasions, vec!["Birthday"]);
        assert_eq!(endpoint.reads(), 1);
    }

    #[test]
    fn test_partial_body_loads_nothing() {
        let endpoint = FakeEndpoint::with_body(r#"{"occasions":["Birthday"]}"#);

        let lists = tokio_test::block_on(load_reference_lists(&endpoint));
        assert_eq!(lists, ReferenceLists::default());
    }

    #[test]
    fn test_error_body_loads_nothing() {
        let endpoint = FakeEndpoint::with_body(r#"{"error":"script failed"}"#);
        assert!(matches!(
            tokio_test::block_on(endpoint.fetch_reference_lists()),
            Err(EntryError::Decode(_))
        ));

        let lists = tokio_test::block_on(load_reference_lists(&endpoint));
        assert!(lists.is_empty());
    }

    #[test]
    fn test_load_reference_lists_failure_leaves_lists_empty() {
        let endpoint = FakeEndpoint::failing_reads(EntryError::Decode("not json".to_string()));

        let lists = tokio_test::block_on(load_reference_lists(&endpoint));
        assert!(lists.is_empty());
        assert_eq!(endpoint.reads(), 1);
    }
}
