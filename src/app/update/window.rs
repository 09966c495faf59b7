// src/app/update/window.rs
//! Window lifecycle and animation frame handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.ui.tick_animations(Instant::now());
                Some(Task::none())
            }

            Message::RequestClose => {
                self.save_session();
                Some(iced::exit())
            }

            _ => None,
        }
    }

    /// Write the controller snapshot to the session store
    pub fn save_session(&self) {
        let snapshot = self.screen.snapshot();
        match self.core.session_store.save_state(&snapshot) {
            Ok(()) => tracing::info!(
                "Session saved: onboarding={}, {} expanded",
                snapshot.show_onboarding,
                snapshot.expanded.len()
            ),
            Err(e) => tracing::warn!("Failed to save session: {:#}", e),
        }
    }
}
