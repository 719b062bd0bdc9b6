use std::fmt;

use serde::Serialize;

use super::MalformedLine;
use crate::error::CoreError;

/// A change an update actually made to the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum AppliedChange {
    /// The player picked an item up.
    Taken {
        /// The item.
        item: String,
    },
    /// The player handed an item to someone.
    Given {
        /// The item.
        item: String,
        /// The receiving character.
        to: String,
    },
    /// The player left an item where they stand.
    Dropped {
        /// The item.
        item: String,
        /// The player's location.
        at: String,
    },
    /// A passage out of the player's location opened.
    Unblocked {
        /// The player's location.
        from: String,
        /// The location now reachable.
        to: String,
    },
    /// The player changed location.
    Moved {
        /// Where the player was.
        from: String,
        /// Where the player is now.
        to: String,
    },
}

impl fmt::Display for AppliedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken { item } => write!(f, "took <{item}>"),
            Self::Given { item, to } => write!(f, "gave <{item}> to <{to}>"),
            Self::Dropped { item, at } => write!(f, "dropped <{item}> in <{at}>"),
            Self::Unblocked { from, to } => write!(f, "opened the passage from <{from}> to <{to}>"),
            Self::Moved { from, to } => write!(f, "went from <{from}> to <{to}>"),
        }
    }
}

/// A clause of an update that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "failure", rename_all = "snake_case")]
pub enum UpdateFailure {
    /// The clause names an item the world does not know.
    #[error("unknown item <{name}>{}", did_you_mean(.suggestion))]
    UnknownItem {
        /// The name as written.
        name: String,
        /// The closest known item name.
        suggestion: Option<String>,
    },

    /// The clause names a location the world does not know.
    #[error("unknown location <{name}>{}", did_you_mean(.suggestion))]
    UnknownLocation {
        /// The name as written.
        name: String,
        /// The closest known location name.
        suggestion: Option<String>,
    },

    /// A labeled line carried neither `None` nor a bracketed name.
    #[error("malformed line: {line}")]
    Malformed {
        /// The offending line.
        line: MalformedLine,
    },

    /// The world refused the action the clause asked for.
    #[error("{clause}: {error}")]
    Rejected {
        /// The clause, rewritten in protocol form.
        clause: String,
        /// Why the world refused.
        error: CoreError,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean <{s}>?)"))
        .unwrap_or_default()
}

/// What applying an update did, clause by clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Changes made, in application order.
    pub applied: Vec<AppliedChange>,
    /// Clauses skipped, in application order.
    pub failures: Vec<UpdateFailure>,
    /// The narration span of the update, if any.
    pub narration: Option<String>,
}

impl UpdateReport {
    /// Whether every clause applied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether the world changed at all.
    pub fn changed_world(&self) -> bool {
        !self.applied.is_empty()
    }

    /// The new location of the player, if the update moved them.
    pub fn moved_to(&self) -> Option<&str> {
        self.applied.iter().find_map(|change| match change {
            AppliedChange::Moved { to, .. } => Some(to.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::Category;

    #[test]
    fn failure_messages() {
        let unknown = UpdateFailure::UnknownItem {
            name: "Apples".to_string(),
            suggestion: Some("Apple".to_string()),
        };
        assert_eq!(unknown.to_string(), "unknown item <Apples> (did you mean <Apple>?)");

        let malformed = UpdateFailure::Malformed {
            line: MalformedLine {
                category: Category::LocationChange,
                content: "the garden".to_string(),
            },
        };
        assert!(malformed.to_string().starts_with("malformed line: "));
        assert!(malformed.to_string().ends_with("the garden"));
    }

    #[test]
    fn report_summaries() {
        let report = UpdateReport {
            applied: vec![
                AppliedChange::Taken {
                    item: "Key".to_string(),
                },
                AppliedChange::Moved {
                    from: "Cellar".to_string(),
                    to: "Kitchen".to_string(),
                },
            ],
            failures: Vec::new(),
            narration: None,
        };
        assert!(report.is_clean());
        assert!(report.changed_world());
        assert_eq!(report.moved_to(), Some("Kitchen"));
        assert_eq!(report.applied[1].to_string(), "went from <Cellar> to <Kitchen>");
    }

    #[test]
    fn report_serializes_tagged() {
        let report = UpdateReport {
            applied: vec![AppliedChange::Given {
                item: "Apple".to_string(),
                to: "Elvira".to_string(),
            }],
            failures: vec![UpdateFailure::Rejected {
                clause: "move to <Kitchen>".to_string(),
                error: CoreError::Unreachable {
                    from: "Cellar".to_string(),
                    to: "Kitchen".to_string(),
                },
            }],
            narration: Some("Elvira smiles.".to_string()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["applied"][0]["change"], "given");
        assert_eq!(json["applied"][0]["to"], "Elvira");
        assert_eq!(json["failures"][0]["failure"], "rejected");
        assert_eq!(json["failures"][0]["error"]["error"], "unreachable");
        assert_eq!(json["failures"][0]["error"]["details"]["to"], "Kitchen");
        assert_eq!(json["narration"], "Elvira smiles.");
    }
}
