use iced::{
    Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, scrollable, text, Column},
};
use iced_widget::container::bordered_box;

use crate::{
    core::nav::View,
    gui::{Message, NavRequest},
    models::Health,
};

pub const MUTED: Color = Color {
    r: 0.45,
    g: 0.5,
    b: 0.55,
    a: 1.0,
};

pub fn health_color(health: Health) -> Color {
    match health {
        Health::Healthy => Color::from_rgb8(0x16, 0xa3, 0x4a),
        Health::Moderate => Color::from_rgb8(0xf9, 0x73, 0x16),
        Health::Poor => Color::from_rgb8(0xef, 0x44, 0x44),
    }
}

/// Background of a sidebar tab; the active tab is darkened.
fn tab_style(active: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(1));
        if active {
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        } else {
            style.background(theme.palette().background)
        }
    }
}

pub fn header<'a, M: 'a>(title: &str, subtitle: &str) -> Element<'a, M> {
    column![
        text(title.to_string()).size(28),
        text(subtitle.to_string()).size(14).color(MUTED),
    ]
    .spacing(4)
    .into()
}

pub fn stat_card<'a, M: 'a>(title: &str, value: impl ToString, color: Option<Color>) -> Element<'a, M> {
    let value = text(value.to_string()).size(26);
    let value = match color {
        Some(color) => value.color(color),
        None => value,
    };
    container(column![text(title.to_string()).size(14).color(MUTED), value].spacing(6))
        .padding(16)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

pub fn layout<'a>(active: View, main_content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let tabs = View::sidebar()
        .iter()
        .fold(Column::new().spacing(4), |tabs, &view| {
            tabs.push(
                container(
                    button(text(view.label()))
                        .width(Length::Fill)
                        .style(button::text)
                        .on_press(Message::Navigate(NavRequest::SwitchView(view))),
                )
                .style(tab_style(view == active)),
            )
        });

    container(row![
        container(
            column![
                text("Urban Trees").size(24),
                text("Badulla tree registry").size(13).color(MUTED),
                tabs,
            ]
            .spacing(12)
            .padding(12)
        )
        .height(Length::Fill)
        .width(Length::FillPortion(1)),
        container(scrollable(container(main_content.into()).padding(20)))
            .width(Length::FillPortion(5)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
