//! Prop bindings and per-state overrides

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Interaction state a prop value can be overridden for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropState {
    Hovered,
    Pressed,
    Focused,
    Selected,
    ReadOnly,
}

/// Value of a prop while every state in `state` holds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropStateValue {
    pub state: Vec<PropState>,
    pub value: Value,
}

impl PropStateValue {
    pub fn new(state: impl IntoIterator<Item = PropState>, value: Value) -> Self {
        Self {
            state: state.into_iter().collect(),
            value,
        }
    }

    /// Same set of states, ignoring order and repeats
    pub fn same_states(&self, other: &PropStateValue) -> bool {
        let normalize = |states: &[PropState]| {
            let mut states = states.to_vec();
            states.sort_unstable();
            states.dedup();
            states
        };
        normalize(&self.state) == normalize(&other.state)
    }
}

/// Binding of one component API prop to a value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropConfig {
    /// Id of the bound [`ComponentApi`](crate::ComponentApi)
    pub id: Uuid,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<PropStateValue>,
}

impl PropConfig {
    pub fn new(id: Uuid, value: Value) -> Self {
        Self {
            id,
            value,
            states: Vec::new(),
        }
    }

    pub fn state(&self, state: &[PropState]) -> Option<&PropStateValue> {
        let wanted = PropStateValue::new(state.iter().copied(), Value::Null);
        self.states.iter().find(|entry| entry.same_states(&wanted))
    }

    /// Append a state override unless `has_state` reports it as present.
    ///
    /// Returns whether the entry was added.
    pub fn add_state<F>(&mut self, entry: PropStateValue, has_state: F) -> bool
    where
        F: Fn(&PropConfig, &PropStateValue) -> bool,
    {
        if has_state(self, &entry) {
            return false;
        }
        self.states.push(entry);
        true
    }
}

/// Default duplicate check: an entry with the exact same state set exists.
///
/// A combination like `[hovered, selected]` is not a duplicate of `[hovered]`.
pub fn has_exact_state(prop: &PropConfig, entry: &PropStateValue) -> bool {
    prop.states.iter().any(|existing| existing.same_states(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn state_sets_compare_unordered() {
        let a = PropStateValue::new([PropState::Hovered, PropState::Selected], json!(1));
        let b = PropStateValue::new([PropState::Selected, PropState::Hovered], json!(2));
        assert!(a.same_states(&b));
    }

    #[test]
    fn read_only_wire_name() {
        assert_eq!(
            serde_json::to_value(PropState::ReadOnly).unwrap(),
            json!("readOnly")
        );
    }

    #[test]
    fn lookup_by_state_set() {
        let mut prop = PropConfig::new(Uuid::nil(), json!("dark.text.default.primary"));
        prop.add_state(
            PropStateValue::new([PropState::Pressed], json!("dark.text.default.secondary")),
            has_exact_state,
        );
        assert!(prop.state(&[PropState::Pressed]).is_some());
        assert!(prop.state(&[PropState::Hovered]).is_none());
    }
}
