//! Animated hearts - a burst of floating hearts for iced applications
//!
//! Tap the overlay (or call [`ui::widgets::TriggerAnimation::trigger_animation`])
//! and a randomized batch of hearts fades in, floats upward, fades out and is
//! removed.

pub mod config;
pub mod hearts;
pub mod ui;

pub use config::{ConfigError, HeartConfig};
pub use ui::widgets::{HeartBurst, TriggerAnimation};
