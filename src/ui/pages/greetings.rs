//! Greetings page
//!
//! Scrollable list: a header row followed by one card per item.

use iced::widget::{Column, column, scrollable, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::screen::GreetingItem;
use crate::i18n::{Key, Locale};
use crate::ui::animation::ExpandAnimations;
use crate::ui::components::greeting_card;
use crate::ui::theme;

/// Build the greetings list page
///
/// # Arguments
/// * `items` - Greeting items in list order
/// * `animations` - Expand springs keyed by item index
/// * `body` - Filler text shown in expanded cards
/// * `opacity` - Page fade progress (0.0 to 1.0)
pub fn view<'a>(
    items: &'a [GreetingItem],
    animations: &ExpandAnimations<usize>,
    body: &'a str,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let header = text(locale.get(Key::GreetingsHeader))
        .size(14)
        .style(theme::header_text);

    let cards = items.iter().enumerate().map(|(index, item)| {
        let spring = animations.progress(&index);
        greeting_card::view(index, item, spring, body, opacity, locale)
    });

    let list = column![header].push(Column::with_children(cards).width(Fill));

    scrollable(list.padding([4, 0]).width(Fill))
        .width(Fill)
        .height(Fill)
        .into()
}
