//! Reusable UI widgets
//!
//! Widgets use generic Message types or their own message enum and never
//! depend on the demo application.

pub mod heart_burst;
mod trigger_button;

pub use heart_burst::{HeartBurst, TriggerAnimation};
pub use trigger_button::trigger_button;
