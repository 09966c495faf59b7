// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;

use crate::features::{ScreenController, SessionStore, Settings};
use crate::i18n::{Key, Language, Locale};
use crate::ui::animation::{ExpandAnimations, FadeAnimation};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale, session persistence)
    pub core: CoreState,
    /// View state: onboarding flag and greeting items
    pub screen: ScreenController,
    /// UI state (animations)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    /// Where settings are saved; `None` disables saving
    pub settings_path: Option<PathBuf>,
    pub locale: Locale,
    pub session_store: Box<dyn SessionStore>,
    /// Filler text shown in expanded cards, built once from settings
    pub greeting_body: String,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        session_store: Box<dyn SessionStore>,
    ) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let greeting_body = Self::build_body(locale, settings.greetings.body_repeat);

        Self {
            settings,
            settings_path,
            locale,
            session_store,
            greeting_body,
        }
    }

    fn build_body(locale: Locale, repeat: usize) -> String {
        locale
            .get(Key::GreetingBody)
            .repeat(repeat)
            .trim_end()
            .to_string()
    }

    /// Persist settings if a settings path is configured
    pub fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };

        if let Err(e) = self.settings.save_to_file(path) {
            tracing::warn!("Failed to save settings to {}: {}", path.display(), e);
        }
    }
}

/// UI View State
#[derive(Debug, Default)]
pub struct UiState {
    /// Per-card expand springs keyed by list index
    pub expand_animations: ExpandAnimations<usize>,
    /// Greeting list fade-in after onboarding
    pub greetings_fade: FadeAnimation,
}

impl UiState {
    /// `list_visible` skips the fade when the list is the first page shown
    pub fn new(list_visible: bool) -> Self {
        Self {
            expand_animations: ExpandAnimations::new(),
            greetings_fade: if list_visible {
                FadeAnimation::shown()
            } else {
                FadeAnimation::hidden()
            },
        }
    }

    /// Tick all animations and drop the settled ones
    pub fn tick_animations(&mut self, now: std::time::Instant) {
        self.expand_animations.tick(now);
        self.greetings_fade.tick(now);
        self.expand_animations.cleanup_completed();
    }
}
