//! Headless heart burst core
//!
//! Everything here is independent of rendering and of the system clock:
//! spawn randomization, id allocation, the per-heart timeline, the pool and
//! the trigger rate limiter. [`crate::ui::widgets::HeartBurst`] wires these
//! into an iced component.

mod easing;
mod heart;
mod pool;
mod spawn;
mod timeline;
mod trigger;

pub use heart::{Heart, HeartId, IdGenerator};
pub use pool::{HeartPool, LiveHeart, RemovalPolicy};
pub use spawn::{BatchSize, MAX_HEART_SIZE, MIN_HEART_SIZE, Viewport, spawn_batch};
pub use timeline::{HeartFrame, HeartPhase, HeartTiming, HeartTimeline};
pub use trigger::{Activation, DebounceToken, RateLimitPolicy, RateLimiter};
