//! Button that fires a heart burst from outside the overlay

use iced::widget::{button, text};
use iced::{Element, Padding};

use crate::ui::theme;

/// Build the trigger button
pub fn trigger_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(label).size(15))
        .padding(Padding::new(12.0).left(24.0).right(24.0))
        .style(theme::trigger_button)
        .on_press(on_press)
        .into()
}
