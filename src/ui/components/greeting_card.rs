//! Greeting card component
//!
//! One row of the greeting list: "Hello," plus the name, an optional body
//! revealed by a spring, and an expand/collapse button.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill, Font};

use crate::app::Message;
use crate::features::screen::GreetingItem;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, EXTRA_BOLD_WEIGHT};
use crate::ui::widgets::expand_button;

/// Below this progress the body is not laid out at all
const MIN_VISIBLE_PROGRESS: f32 = 0.01;

const NAME_SIZE: f32 = 34.0;

/// Body text metrics used to size the reveal clip
const BODY_LINE_HEIGHT: f32 = 16.0 * 1.3;
/// Characters per line at the narrowest usable card width
const BODY_MIN_CHARS_PER_LINE: usize = 24;

/// How the body section is laid out
#[derive(Debug, Clone, Copy, PartialEq)]
enum BodyLayout {
    Hidden,
    /// Spring in flight: body clipped to this height
    Clipped(f32),
    /// Settled and expanded: body at its natural height
    Full,
}

/// Height of the clip at reveal progress 1.0
///
/// Over-estimates the laid-out text height so the spring never stops short
/// of the last line. The clip is a `max_height`, so extra room costs nothing.
fn reveal_height(body: &str) -> f32 {
    let lines = body.chars().count().div_ceil(BODY_MIN_CHARS_PER_LINE).max(1);
    lines as f32 * BODY_LINE_HEIGHT
}

fn body_layout(expanded: bool, spring: Option<f32>, body: &str) -> BodyLayout {
    match spring {
        Some(progress) if progress > MIN_VISIBLE_PROGRESS => {
            BodyLayout::Clipped(reveal_height(body) * progress)
        }
        Some(_) => BodyLayout::Hidden,
        None if expanded => BodyLayout::Full,
        None => BodyLayout::Hidden,
    }
}

/// Build one greeting card
///
/// # Arguments
/// * `index` - List position, sent back with `Message::ToggleExpand`
/// * `item` - Name and expanded flag
/// * `spring` - Expand spring progress, `None` when no spring is in flight
/// * `body` - Filler text shown when expanded
/// * `opacity` - Page fade progress
pub fn view<'a>(
    index: usize,
    item: &'a GreetingItem,
    spring: Option<f32>,
    body: &'a str,
    opacity: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let name = text(item.name.as_str()).size(NAME_SIZE).font(Font {
        weight: EXTRA_BOLD_WEIGHT,
        ..Default::default()
    });

    let body_section: Element<'a, Message> = match body_layout(item.expanded, spring, body) {
        BodyLayout::Hidden => Space::new().height(0).into(),
        BodyLayout::Clipped(height) => container(text(body)).max_height(height).clip(true).into(),
        BodyLayout::Full => text(body).into(),
    };

    let content = column![text(locale.get(Key::GreetingHello)), name, body_section]
        .width(Fill)
        .padding(12);

    let tooltip_label = if item.expanded {
        locale.get(Key::ShowLess)
    } else {
        locale.get(Key::ShowMore)
    };

    let card = container(
        row![
            content,
            expand_button::view(item.expanded, tooltip_label, Message::ToggleExpand(index)),
        ]
        .align_y(Alignment::Start)
        .padding(12),
    )
    .width(Fill)
    .style(move |theme| theme::greeting_card(theme, opacity));

    container(card).padding([4, 8]).into()
}
