// src/app/view.rs
//! Application view rendering

use iced::widget::container;
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::features::Screen;
use crate::ui::{pages, theme};

impl App {
    /// Build the view for the current screen
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.screen.render() {
            Screen::Onboarding => pages::onboarding::view(self.core.locale),
            Screen::Greetings => pages::greetings::view(
                self.screen.items(),
                &self.ui.expand_animations,
                &self.core.greeting_body,
                self.ui.greetings_fade.progress(),
                self.core.locale,
            ),
        };

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
