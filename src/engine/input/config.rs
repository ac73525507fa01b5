// Key binding configuration and remapping

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration with the default bindings
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);

        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.action_to_keys
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_keys.clear();
    }

    /// Restore the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (key, action) in default_bindings() {
            self.bind(key, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Control;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyG, Action::Increase(Control::Primary));

        assert_eq!(
            config.action_for(KeyCode::KeyG),
            Some(Action::Increase(Control::Primary))
        );
    }

    #[test]
    fn test_unbind_key() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyG, Action::Reset);
        config.unbind_key(KeyCode::KeyG);

        assert_eq!(config.action_for(KeyCode::KeyG), None);
        assert!(config.keys_for(Action::Reset).is_empty());
    }

    #[test]
    fn test_rebind_key() {
        let mut config = InputConfig::new();
        config.bind(KeyCode::KeyG, Action::Reset);
        config.bind(KeyCode::KeyG, Action::Quit);

        assert_eq!(config.action_for(KeyCode::KeyG), Some(Action::Quit));
        assert!(config.keys_for(Action::Reset).is_empty());
    }

    #[test]
    fn test_keys_for_multiple_bindings() {
        let config = InputConfig::with_defaults();
        let keys = config.keys_for(Action::TogglePause);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&KeyCode::Space));
        assert!(keys.contains(&KeyCode::KeyP));
    }

    #[test]
    fn test_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.action_for(KeyCode::Digit3), Some(Action::SelectTab(2)));
        assert_eq!(config.action_for(KeyCode::KeyR), Some(Action::Reset));
        assert_eq!(config.action_for(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::with_defaults();
        config.clear();
        config.bind(KeyCode::KeyZ, Action::Quit);
        config.reset_to_defaults();

        assert_eq!(config.action_for(KeyCode::KeyZ), None);
        assert_eq!(config.action_for(KeyCode::Escape), Some(Action::Quit));
    }
}
