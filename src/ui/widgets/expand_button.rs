//! Expand/collapse icon button
//!
//! Chevron icon button with a tooltip. Uses a generic Message type and does
//! not depend on application-specific types.

use iced::widget::{button, container, svg, tooltip};
use iced::{Element, Length};

use crate::ui::{icons, theme};

const BUTTON_SIZE: f32 = 48.0;
const ICON_SIZE: f32 = 24.0;

/// Create an expand/collapse button
///
/// # Arguments
/// * `expanded` - Shows the "less" chevron when true, "more" otherwise
/// * `label` - Tooltip text describing what a press does
/// * `on_press` - Message to send when pressed
pub fn view<'a, Message: Clone + 'a>(
    expanded: bool,
    label: &'a str,
    on_press: Message,
) -> Element<'a, Message> {
    let icon = if expanded {
        icons::EXPAND_LESS
    } else {
        icons::EXPAND_MORE
    };

    let btn = button(
        container(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(ICON_SIZE)
                .height(ICON_SIZE)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::on_primary(theme)),
                }),
        )
        .center(Length::Fill),
    )
    .width(BUTTON_SIZE)
    .height(BUTTON_SIZE)
    .padding(0)
    .style(theme::card_icon_button)
    .on_press(on_press);

    tooltip(btn, label, tooltip::Position::Bottom).into()
}
