//! Core types for the action system.

use std::fmt;

/// Unique identifier for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionId(pub &'static str);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The side effect an action produces when selected.
///
/// A closed set so the dispatcher can handle every kind exhaustively
/// instead of inspecting an opaque callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perform {
    /// Rewrite the current path to `{org}/{project}/{section}`.
    RewritePath { section: &'static str },
    /// Rewrite the current path to a fixed absolute path, bypassing the
    /// section resolver (e.g. `/` or `/create`).
    NavigateAbsolute { path: &'static str },
    /// Full-page navigation to another origin (docs, community links).
    NavigateExternal { url: &'static str },
    /// No side effect; used by pure parent/group actions.
    #[default]
    Nothing,
}

/// A user-invokable action with metadata.
#[derive(Debug, Clone, Default)]
pub struct Action {
    /// Unique identifier.
    pub id: ActionId,
    /// Human-readable name (shown in the results list).
    pub name: &'static str,
    /// Shortcut chord as an ordered sequence of key tokens (may be empty).
    pub shortcut: &'static [&'static str],
    /// Additional free text for fuzzy search; opaque to this crate.
    pub keywords: &'static str,
    /// Display group label; groups render in insertion order of first
    /// occurrence.
    pub section: &'static str,
    /// Parent action, if this action lives inside a sub-menu.
    pub parent: Option<ActionId>,
    /// Optional second display line.
    pub subtitle: Option<&'static str>,
    /// Optional icon identifier; opaque to this crate.
    pub icon: Option<&'static str>,
    /// What selecting this action does.
    pub perform: Perform,
}

impl Action {
    /// Searchable text handed to the external matcher.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.keywords).to_lowercase()
    }
}
