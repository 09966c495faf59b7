//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "问候");
    m.insert(Key::TitleCardCount, "张卡片");

    // Onboarding
    m.insert(Key::OnboardingWelcome, "欢迎来到基础入门课程！");
    m.insert(Key::OnboardingContinue, "继续");

    // Greetings list
    m.insert(Key::GreetingsHeader, "标题");
    m.insert(Key::GreetingHello, "你好，");
    // Filler text stays as in the English layout sample
    m.insert(
        Key::GreetingBody,
        "Composem ipsum color sit lazy, padding theme elit, sed do bouncy. ",
    );
    m.insert(Key::ShowMore, "展开");
    m.insert(Key::ShowLess, "收起");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
