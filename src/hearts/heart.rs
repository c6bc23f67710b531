//! Heart entity and id allocation

use std::fmt;

/// Stable identity of a spawned heart
///
/// Doubles as the render key and the removal target, so ids are never reused
/// while the generator that issued them is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeartId(u64);

impl HeartId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HeartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heart#{}", self.0)
    }
}

/// Monotonic id source
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next unused id
    pub fn next_id(&mut self) -> HeartId {
        let id = HeartId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// A single heart as spawned: identity, glyph size and anchor position
///
/// Animation state is not stored here; see [`super::HeartTimeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub id: HeartId,
    /// Edge length of the square glyph box in logical pixels
    pub size: u32,
    /// Left edge of the glyph box
    pub x: f32,
    /// Top edge of the glyph box before any rise offset
    pub y: f32,
}
