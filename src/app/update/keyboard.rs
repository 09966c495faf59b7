// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Action, Screen};

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        match action {
            // Only meaningful while the onboarding page is up
            Action::Continue if self.screen.render() == Screen::Onboarding => {
                self.update(Message::Continue)
            }
            Action::Continue => Task::none(),
            Action::ToggleDarkMode => self.update(Message::ToggleDarkMode),
            Action::Quit => self.update(Message::RequestClose),
        }
    }
}
