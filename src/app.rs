//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use iced::{Task, Theme};

use crate::features::{
    FileSessionStore, MemorySessionStore, Screen, ScreenController, SessionStore, Settings,
};
use crate::i18n::Key;
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale and list size
        let settings = Settings::load();

        // 2. Session store lives in the platform data dir when there is one
        let store: Box<dyn SessionStore> = match FileSessionStore::in_data_dir() {
            Some(store) => {
                tracing::debug!("Session file: {}", store.path().display());
                Box::new(store)
            }
            None => {
                tracing::warn!("No data directory, session will not survive restarts");
                Box::new(MemorySessionStore::default())
            }
        };

        (Self::with_parts(settings, Settings::file_path(), store), Task::none())
    }

    /// Build the app from explicit parts, restoring the saved session if enabled
    pub fn with_parts(
        settings: Settings,
        settings_path: Option<PathBuf>,
        session_store: Box<dyn SessionStore>,
    ) -> Self {
        let mut screen = ScreenController::with_item_count(settings.greetings.item_count);

        if settings.session.restore {
            match session_store.load_state() {
                Ok(Some(snapshot)) => {
                    screen.restore(&snapshot);
                    tracing::info!(
                        "Restored session: onboarding={}, {} expanded",
                        screen.show_onboarding(),
                        snapshot.expanded.len()
                    );
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to restore session: {:#}", e),
            }
        }

        let ui = UiState::new(screen.render() == Screen::Greetings);
        let core = CoreState::new(settings, settings_path, session_store);

        Self { core, screen, ui }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title reflecting the current screen
    pub fn title(&self) -> String {
        let name = self.core.locale.get(Key::AppName);
        match self.screen.render() {
            Screen::Onboarding => name.to_string(),
            Screen::Greetings => format!(
                "{} - {} {}",
                name,
                self.screen.len(),
                self.core.locale.get(Key::TitleCardCount)
            ),
        }
    }

    /// Subscriptions for animations, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Window close request (session is saved before exiting)
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 3. Animation frames, only while something moves
        let animation_sub = if subscription_logic::needs_animation_subscription(
            self.ui.expand_animations.is_animating(),
            self.ui.greetings_fade.is_animating(),
        ) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, close_request_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(expanding: bool, fading: bool) -> bool {
        expanding || fading
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use super::*;
    use crate::features::session::SessionSnapshot;
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};
    use std::time::{Duration, Instant};

    fn test_settings(item_count: usize) -> Settings {
        let mut settings = Settings::default();
        settings.greetings.item_count = item_count;
        settings
    }

    fn test_app(item_count: usize) -> App {
        App::with_parts(
            test_settings(item_count),
            None,
            Box::new(MemorySessionStore::default()),
        )
    }

    fn expanded_flags(app: &App) -> Vec<bool> {
        app.screen.items().iter().map(|i| i.expanded).collect()
    }

    #[test]
    fn animation_subscription_only_while_moving() {
        assert!(!needs_animation_subscription(false, false));
        assert!(needs_animation_subscription(true, false));
        assert!(needs_animation_subscription(false, true));
    }

    mod property_flow {
        use super::*;

        #[test]
        fn starts_on_onboarding() {
            let app = test_app(1000);
            assert_eq!(app.screen.render(), Screen::Onboarding);
            assert_eq!(app.title(), "Greetings");
            assert_eq!(app.screen.items().get(42).map(|i| i.name.as_str()), Some("42"));
        }

        #[test]
        fn continue_message_shows_list() {
            let mut app = test_app(3);
            let _ = app.update(Message::Continue);
            assert_eq!(app.screen.render(), Screen::Greetings);
            assert_eq!(app.title(), "Greetings - 3 cards");

            let _ = app.update(Message::Continue);
            assert_eq!(app.screen.render(), Screen::Greetings);
        }

        #[test]
        fn toggle_message_flips_one_card() {
            let mut app = test_app(3);
            let _ = app.update(Message::Continue);
            let _ = app.update(Message::ToggleExpand(1));
            assert_eq!(expanded_flags(&app), vec![false, true, false]);
            assert!(app.ui.expand_animations.len() == 1);

            let _ = app.update(Message::ToggleExpand(1));
            assert_eq!(expanded_flags(&app), vec![false, false, false]);
        }

        #[test]
        fn out_of_range_toggle_is_ignored() {
            let mut app = test_app(3);
            let _ = app.update(Message::ToggleExpand(3));
            let _ = app.update(Message::ToggleExpand(usize::MAX));
            assert_eq!(expanded_flags(&app), vec![false, false, false]);
            assert!(app.ui.expand_animations.is_empty());
        }

        #[test]
        fn enter_and_space_continue_from_onboarding() {
            for named in [Named::Enter, Named::Space] {
                let mut app = test_app(3);
                let _ = app.update(Message::KeyPressed(Key::Named(named), Modifiers::empty()));
                assert_eq!(app.screen.render(), Screen::Greetings, "{:?}", named);
            }
        }

        #[test]
        fn continue_keys_do_nothing_on_list() {
            let mut app = test_app(3);
            let _ = app.update(Message::Continue);
            let _ = app.update(Message::ToggleExpand(2));

            for named in [Named::Enter, Named::Space] {
                let _ = app.update(Message::KeyPressed(Key::Named(named), Modifiers::empty()));
            }
            assert_eq!(app.screen.render(), Screen::Greetings);
            assert_eq!(expanded_flags(&app), vec![false, false, true]);
        }

        #[test]
        fn ctrl_d_toggles_dark_mode() {
            let mut app = test_app(3);
            let _ = app.update(Message::KeyPressed(
                Key::Character("d".into()),
                Modifiers::CTRL,
            ));
            assert_eq!(app.theme(), Theme::Dark);
        }

        #[test]
        fn settled_springs_are_dropped_on_tick() {
            let mut app = test_app(3);
            let _ = app.update(Message::Continue);
            let _ = app.update(Message::ToggleExpand(1));
            assert_eq!(app.ui.expand_animations.progress(&1), Some(0.0));

            let start = Instant::now();
            for frame in 1..=600 {
                app.ui
                    .tick_animations(start + Duration::from_millis(frame * 16));
            }

            assert!(app.ui.expand_animations.is_empty());
            assert_eq!(app.ui.expand_animations.progress(&1), None);
            assert_eq!(app.ui.greetings_fade.progress(), 1.0);
            assert_eq!(expanded_flags(&app), vec![false, true, false]);
        }

        #[test]
        fn dark_mode_toggle_changes_theme() {
            let mut app = test_app(3);
            assert_eq!(app.theme(), Theme::Light);
            let _ = app.update(Message::ToggleDarkMode);
            assert_eq!(app.theme(), Theme::Dark);
        }
    }

    mod property_session {
        use super::*;

        #[test]
        fn close_request_saves_snapshot() {
            let mut app = test_app(5);
            let _ = app.update(Message::Continue);
            let _ = app.update(Message::ToggleExpand(4));
            let _ = app.update(Message::RequestClose);

            let saved = app.core.session_store.load_state().unwrap();
            assert_eq!(
                saved,
                Some(SessionSnapshot {
                    show_onboarding: false,
                    expanded: vec![4],
                })
            );
        }

        #[test]
        fn saved_session_is_restored() {
            let store = MemorySessionStore::default();
            store
                .save_state(&SessionSnapshot {
                    show_onboarding: false,
                    expanded: vec![0, 2],
                })
                .unwrap();

            let app = App::with_parts(test_settings(3), None, Box::new(store));
            assert_eq!(app.screen.render(), Screen::Greetings);
            assert_eq!(expanded_flags(&app), vec![true, false, true]);
            // No fade-in when the list is the first page
            assert_eq!(app.ui.greetings_fade.progress(), 1.0);
        }

        #[test]
        fn restore_can_be_disabled() {
            let store = MemorySessionStore::default();
            store
                .save_state(&SessionSnapshot {
                    show_onboarding: false,
                    expanded: vec![1],
                })
                .unwrap();

            let mut settings = test_settings(3);
            settings.session.restore = false;
            let app = App::with_parts(settings, None, Box::new(store));
            assert_eq!(app.screen.render(), Screen::Onboarding);
            assert_eq!(expanded_flags(&app), vec![false, false, false]);
        }
    }
}
