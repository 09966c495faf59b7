// src/app/update/screen.rs
//! Onboarding and greeting list message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle screen-related messages
    pub fn handle_screen(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Continue => {
                if self.screen.on_continue() {
                    tracing::info!("Onboarding finished, showing {} greetings", self.screen.len());
                    self.ui.greetings_fade.start();
                }
                Some(Task::none())
            }

            Message::ToggleExpand(index) => {
                match self.screen.on_toggle_expand(*index) {
                    Ok(expanded) => {
                        tracing::debug!("Card {} expanded: {}", index, expanded);
                        self.ui.expand_animations.set_expanded(*index, expanded);
                    }
                    Err(e) => tracing::warn!("Ignoring toggle: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
