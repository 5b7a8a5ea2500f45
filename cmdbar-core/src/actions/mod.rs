//! Action system for the command bar.
//!
//! Centralizes all user-invokable actions with metadata for:
//! - Fuzzy search by the external matcher (name/keywords)
//! - Shortcut chords (ordered key tokens)
//! - Section grouping in the results list
//! - Parent/child nesting used for breadcrumbs and rooted views
//!
//! The registry is built once at startup from a fixed list and is
//! immutable for the process lifetime.

mod builtin;
mod registry;
mod types;

pub use builtin::builtin_actions;
pub use registry::ActionRegistry;
pub use types::{Action, ActionId, Perform};
