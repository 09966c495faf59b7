//! Full-window pages, one per screen

pub mod greetings;
pub mod onboarding;
