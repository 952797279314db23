use thiserror::Error;

use super::balances_model::BalanceAction;
use crate::errors::ErrorKind;

/// Errors raised by the balance manager while validating a batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManualBalanceError {
    /// `field` names the request list that was empty (`balances` or `labels`).
    #[error("{{'{0}': ['Shorter than minimum length 1.']}}")]
    EmptyBatch(&'static str),

    #[error("{{'label': ['Shorter than minimum length 1.']}}")]
    EmptyLabel,

    #[error("Failed to deserialize an amount entry from {0}")]
    AmountDecode(String),

    #[error(
        "When {} manually tracked balances, unknown tags {} were found",
        .action.gerund(),
        .tags.join(", ")
    )]
    UnknownTags {
        action: BalanceAction,
        tags: Vec<String>,
    },

    #[error(
        "Tried to {} {} manually tracked balance labels that do not exist: {}",
        .action.verb(),
        .labels.len(),
        .labels.join(", ")
    )]
    UnknownLabels {
        action: BalanceAction,
        labels: Vec<String>,
    },

    #[error("One or more of the given labels already exist: {}", .0.join(", "))]
    DuplicateLabels(Vec<String>),

    #[error("The following labels are given more than once: {}", .0.join(", "))]
    RepeatedLabels(Vec<String>),
}

impl ManualBalanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManualBalanceError::EmptyBatch(_) | ManualBalanceError::EmptyLabel => ErrorKind::Shape,
            ManualBalanceError::AmountDecode(_) => ErrorKind::FieldDecode,
            ManualBalanceError::UnknownTags { .. } | ManualBalanceError::UnknownLabels { .. } => {
                ErrorKind::ReferentialConflict
            }
            ManualBalanceError::DuplicateLabels(_) | ManualBalanceError::RepeatedLabels(_) => {
                ErrorKind::UniquenessViolation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tags_message_lists_every_tag() {
        let err = ManualBalanceError::UnknownTags {
            action: BalanceAction::Add,
            tags: vec!["notexisting".to_string(), "ghost".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "When adding manually tracked balances, unknown tags notexisting, ghost were found"
        );
    }

    #[test]
    fn test_unknown_labels_message_has_count() {
        let err = ManualBalanceError::UnknownLabels {
            action: BalanceAction::Remove,
            labels: vec!["nonexisting".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Tried to remove 1 manually tracked balance labels that do not exist: nonexisting"
        );
    }

    #[test]
    fn test_empty_batch_names_the_field() {
        assert_eq!(
            ManualBalanceError::EmptyBatch("labels").to_string(),
            "{'labels': ['Shorter than minimum length 1.']}"
        );
    }
}
