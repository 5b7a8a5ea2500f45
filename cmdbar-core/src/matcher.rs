//! Interface to the external fuzzy matcher.
//!
//! The matcher (and the renderer around it) is a separate component:
//! the core hands it flat summaries of every action, and receives back a
//! ranked subset of ids plus the id of the currently "entered" parent
//! action, if any. Both directions are plain data so the matcher can
//! live across a serialization boundary.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, ActionRegistry};

/// Flat, display-oriented view of an [`Action`] handed to the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSummary {
    pub id: String,
    pub name: String,
    pub keywords: String,
    pub shortcut: Vec<String>,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl ActionSummary {
    pub fn from_action(action: &Action) -> Self {
        Self {
            id: action.id.0.to_string(),
            name: action.name.to_string(),
            keywords: action.keywords.to_string(),
            shortcut: action.shortcut.iter().map(|s| s.to_string()).collect(),
            section: action.section.to_string(),
            subtitle: action.subtitle.map(str::to_string),
        }
    }
}

/// Summaries for every registered action, in registration order.
pub fn summaries(registry: &ActionRegistry) -> Vec<ActionSummary> {
    registry.all().iter().map(ActionSummary::from_action).collect()
}

/// What the matcher reports back per keystroke.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResults {
    /// Ranked action ids, best match first. May be empty.
    pub ids: Vec<String>,
    /// The parent action the view is currently rooted in, if any.
    pub root_action_id: Option<String>,
}

/// Map ranked ids back to registered actions.
///
/// Ids the registry does not know are skipped: the matcher may be
/// working from a stale summary list and a missing entry only costs one
/// result row.
pub fn resolve_matches<'r>(
    registry: &'r ActionRegistry,
    results: &MatchResults,
) -> Vec<&'r Action> {
    results
        .ids
        .iter()
        .filter_map(|id| registry.get_str(id))
        .collect()
}
