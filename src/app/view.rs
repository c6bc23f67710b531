//! Application view rendering

use iced::widget::{column, container};
use iced::{Element, Fill};

use animated_hearts::ui::{theme, widgets};

use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let overlay = self.hearts.view().map(Message::Hearts);

        let trigger = widgets::trigger_button("Trigger Heart Animation", Message::TriggerPressed);

        let content = column![
            container(overlay).width(Fill).height(Fill),
            container(trigger).center_x(Fill).padding(24),
        ];

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }
}
