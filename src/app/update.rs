//! Message handling

use iced::Task;

use animated_hearts::TriggerAnimation;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Hearts(msg) => self.hearts.update(msg).map(Message::Hearts),
            Message::TriggerPressed | Message::TriggerShortcut => {
                self.hearts.trigger_animation().map(Message::Hearts)
            }
        }
    }
}
