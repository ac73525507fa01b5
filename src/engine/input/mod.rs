// Keyboard input handling
//
// - `action`: what the user can ask for and the default key bindings
// - `config`: remappable key -> action table
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputConfig};
//
// let config = InputConfig::with_defaults();
//
// // In your event loop, translate a pressed key
// if let Some(action) = config.action_for(key_code) {
//     app.handle_action(action);
// }
// ```

pub mod action;
pub mod config;

// Re-export commonly used types
pub use action::{Action, Control};
pub use config::InputConfig;
