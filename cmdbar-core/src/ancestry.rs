//! Breadcrumb resolution for results rendered inside a rooted view.

use crate::actions::{Action, ActionId, ActionRegistry};
use crate::error::PaletteError;

/// Ancestors of `action` to show as a breadcrumb, root-first.
///
/// With no current root the full ancestor chain is returned. Inside a
/// rooted view (the user has drilled into a parent action) everything
/// from the root upwards is dropped, so the breadcrumb only shows the
/// path beneath the already-visible root.
///
/// A root id that is not among the ancestors is a display-layer
/// inconsistency, not a fatal one: the full chain is returned unchanged
/// and a warning is logged. Cycles in the parent graph still surface as
/// [`PaletteError::CycleDetected`].
pub fn breadcrumb_for<'r>(
    registry: &'r ActionRegistry,
    action: &Action,
    current_root: Option<ActionId>,
) -> Result<Vec<&'r Action>, PaletteError> {
    let chain = registry.ancestors_of(action.id)?;
    let Some(root_id) = current_root else {
        return Ok(chain);
    };

    match chain.iter().position(|ancestor| ancestor.id == root_id) {
        Some(pos) => Ok(chain[pos + 1..].to_vec()),
        None => {
            tracing::warn!(
                "root action '{}' is not an ancestor of '{}'; showing full breadcrumb",
                root_id,
                action.id
            );
            Ok(chain)
        }
    }
}
