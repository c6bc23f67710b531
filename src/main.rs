//! Animated Hearts demo - tap the window or press Space for a burst of hearts

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let config = app::load_config();

    iced::application(
        move || app::App::new(config.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(app::WINDOW_SIZE)
    .antialiasing(true)
    .run()
}
