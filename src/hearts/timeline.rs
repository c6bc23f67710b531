//! Per-heart animation timeline
//!
//! Each heart runs the same linear sequence:
//!
//! ```text
//! Spawned -> FadingIn -> RisingAndVisible -> FadingOut -> Completed
//! ```
//!
//! The rise runs concurrently with the fades on its own clock. The timeline
//! never reads the system clock; callers pass `now` so that many hearts can
//! be driven from one frame event and tests can step time precisely.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::easing;

/// Durations and distances of the heart animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartTiming {
    /// Opacity 0 -> 1, ease-out
    pub fade_in_ms: u64,
    /// Vertical offset 0 -> -rise_distance, ease-out, concurrent with fades
    pub rise_ms: u64,
    /// Time spent fully visible between fade-in and fade-out
    pub hold_ms: u64,
    /// Opacity 1 -> 0, linear
    pub fade_out_ms: u64,
    /// How far a heart floats up, in logical pixels
    pub rise_distance: f32,
}

impl Default for HeartTiming {
    fn default() -> Self {
        Self {
            fade_in_ms: 300,
            rise_ms: 1000,
            hold_ms: 0,
            fade_out_ms: 1000,
            rise_distance: 100.0,
        }
    }
}

impl HeartTiming {
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn rise(&self) -> Duration {
        Duration::from_millis(self.rise_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Time from spawn until the timeline completes (end of fade-out)
    pub fn total(&self) -> Duration {
        self.fade_in() + self.hold() + self.fade_out()
    }
}

/// Lifecycle state of a single heart
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeartPhase {
    /// Created, not yet advanced by a frame
    Spawned,
    FadingIn,
    /// Fully opaque, still rising
    RisingAndVisible,
    FadingOut,
    /// Fade-out finished; the heart must leave the pool
    Completed,
}

/// Visual state sampled at an instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartFrame {
    /// 0.0 (invisible) to 1.0
    pub opacity: f32,
    /// Vertical translation, 0.0 down to `-rise_distance`
    pub offset_y: f32,
}

/// Animation clock of one heart
#[derive(Debug, Clone)]
pub struct HeartTimeline {
    timing: HeartTiming,
    started_at: Instant,
    phase: HeartPhase,
}

impl HeartTimeline {
    /// Start a timeline at `now`
    pub fn start(timing: HeartTiming, now: Instant) -> Self {
        Self {
            timing,
            started_at: now,
            phase: HeartPhase::Spawned,
        }
    }

    pub fn phase(&self) -> HeartPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == HeartPhase::Completed
    }

    /// Instant at which fade-out finishes
    pub fn completes_at(&self) -> Instant {
        self.started_at + self.timing.total()
    }

    fn phase_at(&self, elapsed: Duration) -> HeartPhase {
        let fade_in_end = self.timing.fade_in();
        let hold_end = fade_in_end + self.timing.hold();
        let fade_out_end = hold_end + self.timing.fade_out();

        if elapsed < fade_in_end {
            HeartPhase::FadingIn
        } else if elapsed < hold_end {
            HeartPhase::RisingAndVisible
        } else if elapsed < fade_out_end {
            HeartPhase::FadingOut
        } else {
            HeartPhase::Completed
        }
    }

    /// Move the state machine to the phase `now` falls in
    ///
    /// Returns the new phase when it changed. Phases only move forward, so a
    /// `now` earlier than a previous call leaves the state untouched.
    pub fn advance(&mut self, now: Instant) -> Option<HeartPhase> {
        let elapsed = now.saturating_duration_since(self.started_at);
        let next = self.phase_at(elapsed);
        if next > self.phase {
            self.phase = next;
            Some(next)
        } else {
            None
        }
    }

    /// Opacity and rise offset at `now`
    pub fn sample(&self, now: Instant) -> HeartFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let timing = &self.timing;

        let opacity = match self.phase_at(elapsed) {
            HeartPhase::Spawned => 0.0,
            HeartPhase::FadingIn => easing::ease_out(easing::progress(elapsed, timing.fade_in())),
            HeartPhase::RisingAndVisible => 1.0,
            HeartPhase::FadingOut => {
                let since = elapsed.saturating_sub(timing.fade_in() + timing.hold());
                1.0 - easing::linear(easing::progress(since, timing.fade_out()))
            }
            HeartPhase::Completed => 0.0,
        };

        let rise = easing::ease_out(easing::progress(elapsed, timing.rise()));

        HeartFrame {
            opacity,
            offset_y: -timing.rise_distance * rise,
        }
    }
}
