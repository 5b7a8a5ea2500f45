//! Cmdbar core - headless command-palette logic.
//!
//! This crate contains the palette's data and control layer, including:
//! - Action registry (ids, sections, shortcut chords, parent links)
//! - Ancestry / breadcrumb resolution for rooted views
//! - Section path resolution for in-place navigation
//! - Dispatch of selected actions onto a host navigation capability
//!
//! Fuzzy matching, keyboard capture and rendering live in the embedding
//! UI layer; this crate only exposes the interface they consume (see
//! [`matcher`]).

pub mod actions;
pub mod matcher;

mod ancestry;
mod dispatch;
mod error;
mod nav;

pub use actions::{Action, ActionId, ActionRegistry, Perform, builtin_actions};
pub use ancestry::breadcrumb_for;
pub use dispatch::{Dispatcher, NavigationHost};
pub use error::PaletteError;
pub use matcher::{ActionSummary, MatchResults, resolve_matches};
pub use nav::{NavigationContext, resolve_section_path};
