//! Demo application: a heart burst overlay with a trigger button

mod message;
mod update;
mod view;

use std::path::PathBuf;

use anyhow::Context;
use iced::{Size, Subscription, Task, Theme};

use animated_hearts::hearts::Viewport;
use animated_hearts::{HeartBurst, HeartConfig};

pub use message::Message;

/// Initial window size (portrait, phone-like)
pub const WINDOW_SIZE: Size = Size::new(420.0, 860.0);

/// Environment variable overriding the config file location
const CONFIG_ENV: &str = "ANIMATED_HEARTS_CONFIG";

pub struct App {
    hearts: HeartBurst,
}

impl App {
    /// Create new application instance
    pub fn new(config: HeartConfig) -> (Self, Task<Message>) {
        let viewport = Viewport::from(WINDOW_SIZE);
        let hearts = HeartBurst::new(config, viewport).unwrap_or_else(|e| {
            tracing::warn!("Falling back to default heart config: {}", e);
            HeartBurst::with_defaults(viewport)
        });

        (Self { hearts }, Task::none())
    }

    pub fn title(&self) -> String {
        "Animated Hearts".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Heart frames and resizes, and the Space shortcut
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;

        let hearts_sub = self.hearts.subscription().map(Message::Hearts);

        let keyboard_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Space),
                ..
            }) => Some(Message::TriggerShortcut),
            _ => None,
        });

        Subscription::batch([hearts_sub, keyboard_sub])
    }
}

/// Config location: `$ANIMATED_HEARTS_CONFIG`, else the platform config dir
fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(HeartConfig::file_path)
}

fn try_load_config() -> anyhow::Result<HeartConfig> {
    let Some(path) = config_path() else {
        tracing::info!("No config directory available, using defaults");
        return Ok(HeartConfig::default());
    };

    if !path.exists() {
        let config = HeartConfig::default();
        match config.save_to_file(&path) {
            Ok(()) => tracing::info!("Wrote default heart config to {}", path.display()),
            Err(e) => tracing::warn!("Could not write default config: {}", e),
        }
        return Ok(config);
    }

    let config = HeartConfig::load_from_file(&path)
        .with_context(|| format!("loading heart config from {}", path.display()))?;
    tracing::info!("Loaded heart config from {}", path.display());
    Ok(config)
}

/// Load the heart config, falling back to defaults on any error
pub fn load_config() -> HeartConfig {
    try_load_config().unwrap_or_else(|e| {
        tracing::warn!("Using default heart config: {:#}", e);
        HeartConfig::default()
    })
}
