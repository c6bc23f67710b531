//! Randomized spawn policy for heart batches

use std::ops::RangeInclusive;

use rand::Rng;

use super::heart::{Heart, IdGenerator};

/// Smallest glyph edge length
pub const MIN_HEART_SIZE: u32 = 20;
/// Largest glyph edge length
pub const MAX_HEART_SIZE: u32 = 60;

/// Horizontal spawn band as fractions of the viewport width
const X_BAND: (f32, f32) = (0.1, 0.9);
/// Vertical spawn band as fractions of the viewport height
const Y_BAND: (f32, f32) = (0.2, 0.7);

/// Area hearts are spawned into, in logical pixels
///
/// Passed explicitly on every spawn so the owner can refresh it on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        fn sanitize(v: f32) -> f32 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Allowed range for a heart's `x`
    pub fn x_range(&self) -> RangeInclusive<f32> {
        (self.width * X_BAND.0)..=(self.width * X_BAND.1)
    }

    /// Allowed range for a heart's `y`
    pub fn y_range(&self) -> RangeInclusive<f32> {
        (self.height * Y_BAND.0)..=(self.height * Y_BAND.1)
    }
}

impl From<iced::Size> for Viewport {
    fn from(size: iced::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// How many hearts a batch holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize {
    min: usize,
    max: usize,
}

impl Default for BatchSize {
    fn default() -> Self {
        Self { min: 4, max: 10 }
    }
}

impl BatchSize {
    /// `None` when `min > max`
    pub fn new(min: usize, max: usize) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// Create one batch of hearts with independently randomized size and position
pub fn spawn_batch<R: Rng>(
    rng: &mut R,
    ids: &mut IdGenerator,
    batch: BatchSize,
    viewport: Viewport,
) -> Vec<Heart> {
    let count = rng.random_range(batch.min..=batch.max);
    let x_range = viewport.x_range();
    let y_range = viewport.y_range();

    (0..count)
        .map(|_| Heart {
            id: ids.next_id(),
            size: rng.random_range(MIN_HEART_SIZE..=MAX_HEART_SIZE),
            x: rng.random_range(x_range.clone()),
            y: rng.random_range(y_range.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x4845_4152_5453)
    }

    mod property_bounds {
        use super::*;

        #[test]
        fn batch_count_within_range() {
            let mut rng = rng();
            let mut ids = IdGenerator::new();
            let batch = BatchSize::new(4, 10).unwrap();
            let viewport = Viewport::new(390.0, 844.0);

            for _ in 0..500 {
                let hearts = spawn_batch(&mut rng, &mut ids, batch, viewport);
                assert!(
                    (4..=10).contains(&hearts.len()),
                    "batch of {} outside [4, 10]",
                    hearts.len()
                );
            }
        }

        #[test]
        fn size_and_position_within_bands() {
            let mut rng = rng();
            let mut ids = IdGenerator::new();
            let batch = BatchSize::new(4, 30).unwrap();
            let viewport = Viewport::new(1000.0, 500.0);

            for _ in 0..200 {
                for heart in spawn_batch(&mut rng, &mut ids, batch, viewport) {
                    assert!((MIN_HEART_SIZE..=MAX_HEART_SIZE).contains(&heart.size));
                    assert!((100.0..=900.0).contains(&heart.x), "x = {}", heart.x);
                    assert!((100.0..=350.0).contains(&heart.y), "y = {}", heart.y);
                }
            }
        }

        #[test]
        fn fixed_batch_size_is_exact() {
            let mut rng = rng();
            let mut ids = IdGenerator::new();
            let batch = BatchSize::new(4, 4).unwrap();
            let hearts = spawn_batch(&mut rng, &mut ids, batch, Viewport::new(300.0, 600.0));
            assert_eq!(hearts.len(), 4);
        }
    }

    mod property_unique_ids {
        use super::*;

        #[test]
        fn thousand_hearts_have_distinct_ids() {
            let mut rng = rng();
            let mut ids = IdGenerator::new();
            let batch = BatchSize::new(4, 10).unwrap();
            let viewport = Viewport::new(390.0, 844.0);

            let mut all = Vec::new();
            while all.len() < 1000 {
                all.extend(spawn_batch(&mut rng, &mut ids, batch, viewport));
            }

            let unique: HashSet<_> = all.iter().map(|h| h.id).collect();
            assert_eq!(unique.len(), all.len());
        }
    }

    #[test]
    fn rejects_inverted_batch_size() {
        assert!(BatchSize::new(10, 4).is_none());
        assert!(BatchSize::new(0, 0).is_some());
    }

    #[test]
    fn degenerate_viewport_collapses_to_origin() {
        let viewport = Viewport::new(f32::NAN, -5.0);
        assert_eq!(viewport.width(), 0.0);
        assert_eq!(viewport.height(), 0.0);

        let mut rng = rng();
        let mut ids = IdGenerator::new();
        let hearts = spawn_batch(&mut rng, &mut ids, BatchSize::new(2, 2).unwrap(), viewport);
        assert!(hearts.iter().all(|h| h.x == 0.0 && h.y == 0.0));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let batch = BatchSize::new(4, 10).unwrap();
        let viewport = Viewport::new(390.0, 844.0);

        let a = spawn_batch(&mut rng(), &mut IdGenerator::new(), batch, viewport);
        let b = spawn_batch(&mut rng(), &mut IdGenerator::new(), batch, viewport);
        assert_eq!(a, b);
    }
}
