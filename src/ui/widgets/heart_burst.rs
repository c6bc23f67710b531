//! Heart burst component
//!
//! A tappable overlay that spawns a randomized batch of hearts which fade in,
//! float up, fade out and disappear. Parents embed it with [`HeartBurst::view`]
//! and can fire it without a tap through [`TriggerAnimation`].
//!
//! # Example
//!
//! ```ignore
//! let mut hearts = HeartBurst::new(HeartConfig::default(), Viewport::new(400.0, 800.0))?;
//! let task = hearts.trigger_animation().map(Message::Hearts);
//! ```

use std::time::Instant;

use iced::widget::{Stack, mouse_area, pin, svg};
use iced::{Element, Length, Rectangle, Subscription, Task};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ConfigError, HeartConfig};
use crate::hearts::{
    Activation, BatchSize, DebounceToken, HeartPool, IdGenerator, LiveHeart, RateLimiter,
    Viewport, spawn_batch,
};
use crate::ui::theme;

/// Bundled heart glyph, tinted at render time
const HEART_SVG: &[u8] = include_bytes!("../../../assets/heart.svg");

/// Messages handled by [`HeartBurst::update`]
#[derive(Debug, Clone)]
pub enum Message {
    /// The overlay was tapped
    Tapped,
    /// A debounce timer ran out
    DebounceElapsed(DebounceToken),
    /// Animation frame
    Frame(Instant),
    /// The window changed size
    Resized(iced::Size),
}

/// Imperative handle for firing the effect from a parent
pub trait TriggerAnimation {
    /// Request a new batch of hearts, subject to rate limiting
    ///
    /// The returned task must be handed back to the runtime; a debounced
    /// activation only spawns once its timer completes.
    fn trigger_animation(&mut self) -> Task<Message>;
}

/// Heart burst state
pub struct HeartBurst {
    batch: BatchSize,
    pool: HeartPool,
    limiter: RateLimiter,
    ids: IdGenerator,
    rng: StdRng,
    viewport: Viewport,
    /// Time of the latest frame, used when sampling hearts for rendering
    now: Instant,
}

impl HeartBurst {
    /// Create a burst from a validated configuration
    pub fn new(config: HeartConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        let batch = config.batch_size()?;
        Ok(Self::build(&config, batch, viewport))
    }

    /// Burst with the default configuration
    pub fn with_defaults(viewport: Viewport) -> Self {
        Self::build(&HeartConfig::default(), BatchSize::default(), viewport)
    }

    fn build(config: &HeartConfig, batch: BatchSize, viewport: Viewport) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        tracing::debug!(
            "HeartBurst ready: {}..={} hearts per batch, cap {:?}, {:?} over {:?}",
            batch.min(),
            batch.max(),
            config.pool_cap,
            config.rate_limit,
            config.rate_limit_window()
        );

        Self {
            batch,
            pool: HeartPool::new(config.timing, config.pool_cap, config.removal),
            limiter: RateLimiter::new(config.rate_limit, config.rate_limit_window()),
            ids: IdGenerator::new(),
            rng,
            viewport,
            now: Instant::now(),
        }
    }

    pub fn pool(&self) -> &HeartPool {
        &self.pool
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the spawn area, e.g. after a resize or rotation
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether any heart is still on screen or awaiting removal
    pub fn is_animating(&self) -> bool {
        self.pool.is_animating()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tapped => self.activate(Instant::now()),
            Message::DebounceElapsed(token) => {
                self.on_debounce_elapsed(token, Instant::now());
                Task::none()
            }
            Message::Frame(now) => {
                self.on_frame(now);
                Task::none()
            }
            Message::Resized(size) => {
                self.set_viewport(size.into());
                Task::none()
            }
        }
    }

    /// Feed an activation through the rate limiter
    fn activate(&mut self, now: Instant) -> Task<Message> {
        match self.register_activation(now) {
            Activation::Schedule { token, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    token
                },
                Message::DebounceElapsed,
            ),
            Activation::Fire | Activation::Ignored => Task::none(),
        }
    }

    /// Rate limiting decision for an activation at `now`; spawns on `Fire`
    pub(crate) fn register_activation(&mut self, now: Instant) -> Activation {
        let activation = self.limiter.activate(now);
        match activation {
            Activation::Fire => self.spawn(now),
            Activation::Ignored => tracing::trace!("Heart activation throttled"),
            Activation::Schedule { .. } => {}
        }
        activation
    }

    pub(crate) fn on_debounce_elapsed(&mut self, token: DebounceToken, now: Instant) {
        if self.limiter.elapsed(token) {
            self.spawn(now);
        }
    }

    pub(crate) fn on_frame(&mut self, now: Instant) {
        self.now = now;
        let removed = self.pool.tick(now);
        if !removed.is_empty() {
            tracing::trace!("{} hearts finished, {} live", removed.len(), self.pool.len());
        }
    }

    fn spawn(&mut self, now: Instant) {
        let hearts = spawn_batch(&mut self.rng, &mut self.ids, self.batch, self.viewport);
        tracing::debug!(
            "Spawning {} hearts in {}x{}",
            hearts.len(),
            self.viewport.width(),
            self.viewport.height()
        );
        self.now = now;
        self.pool.append(hearts, now);
    }

    /// Frames while hearts are alive, plus window resizes
    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.is_animating() {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };
        let resize = iced::window::resize_events().map(|(_id, size)| Message::Resized(size));

        Subscription::batch([frames, resize])
    }

    /// Tappable overlay with every live heart at its current frame
    pub fn view(&self) -> Element<'_, Message> {
        let handle = svg::Handle::from_memory(HEART_SVG);

        let layers = self.pool.iter().map(|live| {
            let opacity = live.frame(self.now).opacity;
            let bounds = heart_bounds(live, self.now);

            let glyph = svg(handle.clone())
                .width(bounds.width)
                .height(bounds.height)
                .style(move |_theme, _status| svg::Style {
                    color: Some(theme::heart(opacity)),
                });

            let layer: Element<'_, Message> = pin(glyph).x(bounds.x).y(bounds.y).into();
            layer
        });

        let overlay = Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill);

        mouse_area(overlay).on_press(Message::Tapped).into()
    }
}

/// Glyph box of a heart at `now`, relative to the overlay's top-left corner
///
/// Always `size × size`; the box may extend past the overlay edges, including
/// above the top while rising.
fn heart_bounds(live: &LiveHeart, now: Instant) -> Rectangle {
    let frame = live.frame(now);
    let size = live.heart.size as f32;
    Rectangle {
        x: live.heart.x,
        y: live.heart.y + frame.offset_y,
        width: size,
        height: size,
    }
}

impl TriggerAnimation for HeartBurst {
    fn trigger_animation(&mut self) -> Task<Message> {
        self.activate(Instant::now())
    }
}
