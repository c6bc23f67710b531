//! Live heart collection
//!
//! The pool owns every heart from spawn until removal. Hearts are kept in
//! spawn order so the cap can evict the oldest first.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::heart::{Heart, HeartId};
use super::timeline::{HeartFrame, HeartPhase, HeartTiming, HeartTimeline};

/// When a completed heart leaves the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RemovalPolicy {
    /// Remove on the tick that completes the timeline
    #[default]
    Immediate,
    /// Keep the (invisible) heart for `delay_ms` after completion
    Deferred { delay_ms: u64 },
}

impl RemovalPolicy {
    /// Deferred removal with the 1100ms safety delay
    pub const fn deferred() -> Self {
        RemovalPolicy::Deferred { delay_ms: 1100 }
    }

    pub fn delay(&self) -> Duration {
        match self {
            RemovalPolicy::Immediate => Duration::ZERO,
            RemovalPolicy::Deferred { delay_ms } => Duration::from_millis(*delay_ms),
        }
    }
}

/// A pooled heart with its animation clock
#[derive(Debug, Clone)]
pub struct LiveHeart {
    pub heart: Heart,
    timeline: HeartTimeline,
    /// Set once the timeline completes
    remove_at: Option<Instant>,
}

impl LiveHeart {
    pub fn id(&self) -> HeartId {
        self.heart.id
    }

    pub fn phase(&self) -> HeartPhase {
        self.timeline.phase()
    }

    pub fn frame(&self, now: Instant) -> HeartFrame {
        self.timeline.sample(now)
    }
}

/// Ordered collection of currently animating hearts
#[derive(Debug)]
pub struct HeartPool {
    hearts: VecDeque<LiveHeart>,
    cap: Option<usize>,
    timing: HeartTiming,
    removal: RemovalPolicy,
}

impl HeartPool {
    pub fn new(timing: HeartTiming, cap: Option<usize>, removal: RemovalPolicy) -> Self {
        Self {
            hearts: VecDeque::new(),
            cap,
            timing,
            removal,
        }
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn contains(&self, id: HeartId) -> bool {
        self.hearts.iter().any(|h| h.id() == id)
    }

    /// Hearts in spawn order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &LiveHeart> {
        self.hearts.iter()
    }

    /// Whether any heart still needs frames
    pub fn is_animating(&self) -> bool {
        !self.hearts.is_empty()
    }

    /// Add a batch, starting each timeline at `now`
    ///
    /// Returns the ids evicted to respect the cap, oldest first.
    pub fn append(&mut self, hearts: Vec<Heart>, now: Instant) -> Vec<HeartId> {
        self.hearts.extend(hearts.into_iter().map(|heart| LiveHeart {
            heart,
            timeline: HeartTimeline::start(self.timing, now),
            remove_at: None,
        }));

        let mut evicted = Vec::new();
        if let Some(cap) = self.cap {
            while self.hearts.len() > cap {
                if let Some(oldest) = self.hearts.pop_front() {
                    evicted.push(oldest.id());
                }
            }
        }

        if !evicted.is_empty() {
            tracing::debug!(
                "Heart pool over cap {:?}, evicted {} oldest",
                self.cap,
                evicted.len()
            );
        }
        evicted
    }

    /// Remove the heart with `id`, leaving the others untouched
    pub fn remove(&mut self, id: HeartId) -> bool {
        let before = self.hearts.len();
        self.hearts.retain(|h| h.id() != id);
        before != self.hearts.len()
    }

    /// Advance every timeline to `now` and drop hearts that are due
    ///
    /// Returns the ids removed during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<HeartId> {
        let delay = self.removal.delay();

        for live in self.hearts.iter_mut() {
            if let Some(HeartPhase::Completed) = live.timeline.advance(now) {
                let due = live.timeline.completes_at() + delay;
                tracing::trace!("{} completed, removal due in {:?}", live.id(), delay);
                live.remove_at = Some(due);
            }
        }

        let mut removed = Vec::new();
        self.hearts.retain(|live| match live.remove_at {
            Some(due) if now >= due => {
                removed.push(live.id());
                false
            }
            _ => true,
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hearts::heart::IdGenerator;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hearts(ids: &mut IdGenerator, n: usize) -> Vec<Heart> {
        (0..n)
            .map(|i| Heart {
                id: ids.next_id(),
                size: 20 + i as u32,
                x: 10.0,
                y: 20.0,
            })
            .collect()
    }

    #[test]
    fn append_and_remove_by_id() {
        let mut ids = IdGenerator::new();
        let mut pool = HeartPool::new(HeartTiming::default(), None, RemovalPolicy::Immediate);
        let batch = hearts(&mut ids, 3);
        let target = batch[1].id;

        pool.append(batch, Instant::now());
        assert_eq!(pool.len(), 3);
        assert!(pool.remove(target));
        assert!(!pool.contains(target));
        assert_eq!(pool.len(), 2);
        assert!(!pool.remove(target));
    }

    #[test]
    fn removal_leaves_other_timelines_untouched() {
        let t0 = Instant::now();
        let mut ids = IdGenerator::new();
        let mut pool = HeartPool::new(HeartTiming::default(), None, RemovalPolicy::Immediate);
        let batch = hearts(&mut ids, 2);
        let (first, second) = (batch[0].id, batch[1].id);
        pool.append(batch, t0);
        pool.tick(t0 + ms(500));

        pool.remove(first);
        let survivor = pool.iter().next().unwrap();
        assert_eq!(survivor.id(), second);
        assert_eq!(survivor.phase(), HeartPhase::FadingOut);
    }

    mod property_cap {
        use super::*;

        #[test]
        fn never_exceeds_cap_and_evicts_oldest() {
            let t0 = Instant::now();
            let mut ids = IdGenerator::new();
            let mut pool = HeartPool::new(HeartTiming::default(), Some(5), RemovalPolicy::Immediate);

            let first = hearts(&mut ids, 4);
            let first_ids: Vec<_> = first.iter().map(|h| h.id).collect();
            pool.append(first, t0);

            let evicted = pool.append(hearts(&mut ids, 3), t0 + ms(50));
            assert_eq!(evicted, first_ids[..2].to_vec());
            assert_eq!(pool.len(), 5);
            assert_eq!(pool.iter().next().unwrap().id(), first_ids[2]);

            for round in 0..20 {
                pool.append(hearts(&mut ids, 7), t0 + ms(100 + round));
                assert!(pool.len() <= 5);
            }
        }

        #[test]
        fn uncapped_pool_keeps_everything() {
            let mut ids = IdGenerator::new();
            let mut pool = HeartPool::new(HeartTiming::default(), None, RemovalPolicy::Immediate);
            let evicted = pool.append(hearts(&mut ids, 100), Instant::now());
            assert!(evicted.is_empty());
            assert_eq!(pool.len(), 100);
        }
    }

    mod property_liveness {
        use super::*;

        #[test]
        fn immediate_policy_empties_after_timeline() {
            let t0 = Instant::now();
            let mut ids = IdGenerator::new();
            let mut pool = HeartPool::new(HeartTiming::default(), None, RemovalPolicy::Immediate);
            pool.append(hearts(&mut ids, 6), t0);

            assert!(pool.tick(t0 + ms(1299)).is_empty());
            assert_eq!(pool.len(), 6);

            let removed = pool.tick(t0 + ms(1300));
            assert_eq!(removed.len(), 6);
            assert!(pool.is_empty());
            assert!(!pool.is_animating());
        }

        #[test]
        fn deferred_policy_waits_extra_delay() {
            let t0 = Instant::now();
            let mut ids = IdGenerator::new();
            let mut pool =
                HeartPool::new(HeartTiming::default(), None, RemovalPolicy::deferred());
            pool.append(hearts(&mut ids, 3), t0);

            pool.tick(t0 + ms(1300));
            assert_eq!(pool.len(), 3);
            assert!(pool.iter().all(|h| h.phase() == HeartPhase::Completed));

            pool.tick(t0 + ms(2399));
            assert_eq!(pool.len(), 3);

            assert_eq!(pool.tick(t0 + ms(2400)).len(), 3);
            assert!(pool.is_empty());
        }

        #[test]
        fn late_tick_still_removes() {
            let t0 = Instant::now();
            let mut ids = IdGenerator::new();
            let mut pool =
                HeartPool::new(HeartTiming::default(), None, RemovalPolicy::deferred());
            pool.append(hearts(&mut ids, 2), t0);

            // A single frame long after everything is due
            assert_eq!(pool.tick(t0 + ms(10_000)).len(), 2);
            assert!(pool.is_empty());
        }

        #[test]
        fn batches_complete_independently() {
            let t0 = Instant::now();
            let mut ids = IdGenerator::new();
            let mut pool = HeartPool::new(HeartTiming::default(), None, RemovalPolicy::Immediate);
            pool.append(hearts(&mut ids, 2), t0);
            pool.append(hearts(&mut ids, 3), t0 + ms(600));

            assert_eq!(pool.tick(t0 + ms(1300)).len(), 2);
            assert_eq!(pool.len(), 3);
            assert_eq!(pool.tick(t0 + ms(1900)).len(), 3);
            assert!(pool.is_empty());
        }
    }

    #[test]
    fn removal_policy_serializes_with_mode_tag() {
        let json = serde_json::to_string(&RemovalPolicy::deferred()).unwrap();
        assert_eq!(json, r#"{"mode":"deferred","delay_ms":1100}"#);
        let back: RemovalPolicy = serde_json::from_str(r#"{"mode":"immediate"}"#).unwrap();
        assert_eq!(back, RemovalPolicy::Immediate);
    }
}
