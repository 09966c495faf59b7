//! Onboarding page
//!
//! First screen: a welcome line and a single Continue button.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the onboarding page
pub fn view(locale: Locale) -> Element<'static, Message> {
    let continue_btn = button(text(locale.get(Key::OnboardingContinue)).size(14))
        .padding([8, 16])
        .style(theme::primary_button)
        .on_press(Message::Continue);

    let content = column![
        text(locale.get(Key::OnboardingWelcome)).size(18),
        container(continue_btn).padding([24, 0]),
    ]
    .align_x(Alignment::Center);

    container(content)
        .center(Fill)
        .style(theme::onboarding_surface)
        .into()
}
