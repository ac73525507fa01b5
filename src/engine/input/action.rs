// Demo actions and default key bindings

use winit::keyboard::KeyCode;

/// Which of a demo's two adjustable controls an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Gravity, speed, complexity or angle depending on the demo
    Primary,
    /// Bounce for the physics demo; unused elsewhere
    Secondary,
}

/// Represents everything the user can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    SelectTab(usize),
    NextTab,
    PreviousTab,

    // Parameters
    Increase(Control),
    Decrease(Control),
    Reset,

    // Meta actions
    TogglePause,
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Tabs
        (KeyCode::Digit1, Action::SelectTab(0)),
        (KeyCode::Digit2, Action::SelectTab(1)),
        (KeyCode::Digit3, Action::SelectTab(2)),
        (KeyCode::Digit4, Action::SelectTab(3)),
        (KeyCode::Digit5, Action::SelectTab(4)),
        (KeyCode::Tab, Action::NextTab),
        (KeyCode::BracketRight, Action::NextTab),
        (KeyCode::BracketLeft, Action::PreviousTab),
        // Sliders
        (KeyCode::ArrowUp, Action::Increase(Control::Primary)),
        (KeyCode::ArrowDown, Action::Decrease(Control::Primary)),
        (KeyCode::ArrowRight, Action::Increase(Control::Secondary)),
        (KeyCode::ArrowLeft, Action::Decrease(Control::Secondary)),
        (KeyCode::KeyR, Action::Reset),
        // Meta
        (KeyCode::Space, Action::TogglePause),
        (KeyCode::KeyP, Action::TogglePause),
        (KeyCode::Escape, Action::Quit),
    ]
}
