//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Greetings");
    m.insert(Key::TitleCardCount, "cards");

    // Onboarding
    m.insert(Key::OnboardingWelcome, "Welcome to the Basics Codelab!");
    m.insert(Key::OnboardingContinue, "Continue");

    // Greetings list
    m.insert(Key::GreetingsHeader, "Header");
    m.insert(Key::GreetingHello, "Hello,");
    m.insert(
        Key::GreetingBody,
        "Composem ipsum color sit lazy, padding theme elit, sed do bouncy. ",
    );
    m.insert(Key::ShowMore, "Show more");
    m.insert(Key::ShowLess, "Show less");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
