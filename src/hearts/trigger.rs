//! Rate limiting for trigger activations
//!
//! Rapid taps collapse into one spawn per window. The limiter only decides;
//! the owner runs the timer for debounced activations and reports back with
//! the token it was given.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How repeated activations within the window are collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitPolicy {
    /// Spawn once, after the window passes with no further activation
    #[default]
    Debounce,
    /// Spawn on the first activation, ignore the rest of the window
    Throttle,
}

/// Identifies one scheduled debounce timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

/// What the owner should do with an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Spawn a batch now
    Fire,
    /// Start a timer of `delay`, then call [`RateLimiter::elapsed`] with `token`
    Schedule { token: DebounceToken, delay: Duration },
    /// Dropped by the throttle window
    Ignored,
}

#[derive(Debug)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    window: Duration,
    /// Latest debounce token handed out; older tokens are stale
    pending: Option<DebounceToken>,
    next_token: u64,
    /// Start of the current throttle window
    last_fired: Option<Instant>,
}

impl RateLimiter {
    pub fn new(policy: RateLimitPolicy, window: Duration) -> Self {
        Self {
            policy,
            window,
            pending: None,
            next_token: 0,
            last_fired: None,
        }
    }

    /// Whether a debounced spawn is waiting for its timer
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Register an activation at `now`
    pub fn activate(&mut self, now: Instant) -> Activation {
        match self.policy {
            RateLimitPolicy::Debounce => {
                let token = DebounceToken(self.next_token);
                self.next_token = self.next_token.wrapping_add(1);
                if self.pending.replace(token).is_some() {
                    tracing::trace!("Debounce restarted");
                }
                Activation::Schedule {
                    token,
                    delay: self.window,
                }
            }
            RateLimitPolicy::Throttle => match self.last_fired {
                Some(start) if now.saturating_duration_since(start) < self.window => {
                    Activation::Ignored
                }
                _ => {
                    self.last_fired = Some(now);
                    Activation::Fire
                }
            },
        }
    }

    /// Report that the timer for `token` ran out
    ///
    /// Returns `true` when the batch should be spawned, i.e. no activation
    /// superseded this one.
    pub fn elapsed(&mut self, token: DebounceToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
