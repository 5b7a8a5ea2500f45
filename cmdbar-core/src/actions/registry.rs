//! Action registry - central store for all actions.

use std::collections::HashMap;

use crate::error::PaletteError;

use super::types::{Action, ActionId};

/// Central registry of all actions, indexed by id.
///
/// Built once from a fixed list; read-only afterwards. Ancestor chains
/// are recomputed on demand rather than cached.
pub struct ActionRegistry {
    actions: Vec<Action>,
    by_id: HashMap<&'static str, usize>,
}

impl ActionRegistry {
    /// Build a registry from a list of actions.
    ///
    /// Fails with [`PaletteError::DuplicateId`] if two actions share an
    /// id; no registry value exists on failure.
    pub fn new(actions: Vec<Action>) -> Result<Self, PaletteError> {
        let mut by_id = HashMap::with_capacity(actions.len());
        for (idx, action) in actions.iter().enumerate() {
            if by_id.insert(action.id.0, idx).is_some() {
                return Err(PaletteError::DuplicateId(action.id.0.to_string()));
            }
        }
        Ok(Self { actions, by_id })
    }

    /// Build a registry holding the built-in action set.
    pub fn with_builtin() -> Result<Self, PaletteError> {
        Self::new(super::builtin_actions())
    }

    /// Get an action by id.
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.get_str(id.0)
    }

    /// Get an action by raw id string (as received from the matcher).
    pub fn get_str(&self, id: &str) -> Option<&Action> {
        self.by_id.get(id).map(|&idx| &self.actions[idx])
    }

    /// All actions, in registration order.
    pub fn all(&self) -> &[Action] {
        &self.actions
    }

    /// Find the action bound to an exact shortcut chord.
    pub fn find_by_shortcut(&self, chord: &[&str]) -> Option<&Action> {
        if chord.is_empty() {
            return None;
        }
        self.actions.iter().find(|a| a.shortcut == chord)
    }

    /// Section labels in insertion order of first occurrence.
    pub fn sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::new();
        for action in &self.actions {
            if !sections.contains(&action.section) {
                sections.push(action.section);
            }
        }
        sections
    }

    /// Actions belonging to a section, in registration order.
    pub fn in_section(&self, section: &str) -> Vec<&Action> {
        self.actions.iter().filter(|a| a.section == section).collect()
    }

    /// Ancestor chain of an action, root-first.
    ///
    /// Walks `parent` links up to the nearest root. The walk is bounded
    /// by the registry size: more hops than registered actions means the
    /// parent graph has a cycle, which is a configuration error and is
    /// reported as [`PaletteError::CycleDetected`] rather than truncated.
    pub fn ancestors_of(&self, id: ActionId) -> Result<Vec<&Action>, PaletteError> {
        let start = self
            .get(id)
            .ok_or_else(|| PaletteError::UnknownAction(id.0.to_string()))?;

        let mut chain = Vec::new();
        let mut current = start.parent;
        let mut hops = 0;
        while let Some(parent_id) = current {
            hops += 1;
            if hops > self.actions.len() {
                return Err(PaletteError::CycleDetected(id.0.to_string()));
            }
            let parent = self
                .get(parent_id)
                .ok_or_else(|| PaletteError::UnknownAction(parent_id.0.to_string()))?;
            chain.push(parent);
            current = parent.parent;
        }
        chain.reverse();
        Ok(chain)
    }
}
