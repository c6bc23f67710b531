//! Application messages

use animated_hearts::ui::widgets::heart_burst;

#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the heart burst component
    Hearts(heart_burst::Message),
    /// Trigger button pressed
    TriggerPressed,
    /// Space pressed anywhere in the window
    TriggerShortcut,
}
