use iced::{
    Element, Length,
    widget::{Column, button, column, container, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::nav::View,
    gui::{
        AppState, Message, NavRequest,
        widgets::{MUTED, header, health_color, stat_card},
    },
    models::Health,
};

/// Label, count and bar for one entry of a distribution.
pub fn distribution_row<'a>(label: &str, count: usize, max: usize) -> Element<'a, Message> {
    row![
        text(label.to_string()).width(Length::Fixed(120.0)),
        progress_bar(0.0..=max.max(1) as f32, count as f32),
        text(count.to_string()).width(Length::Fixed(40.0)),
    ]
    .spacing(12)
    .into()
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let summary = state.summary();

    let health = Health::ALL.into_iter().fold(
        Column::new().spacing(8).push(text("Tree Health").size(18)),
        |column, health| {
            column.push(row![
                text(health.label()).color(health_color(health)).width(Length::Fixed(120.0)),
                text(summary.health.get(health).to_string()),
            ])
        },
    );

    let max_area = summary.area_distribution.first().map_or(0, |(_, count)| *count);
    let areas = summary.area_distribution.iter().fold(
        Column::new().spacing(8).push(text("Area Distribution").size(18)),
        |column, (area, count)| column.push(distribution_row(area, *count, max_area)),
    );

    column![
        header("Urban Tree Dashboard", "Badulla Area - monitoring and analytics"),
        row![
            stat_card("Total Trees", summary.total, None),
            stat_card("Tree Species", summary.species, None),
            stat_card("Areas Covered", summary.areas, None),
            stat_card("Health Issues", summary.health_issues(), Some(health_color(Health::Poor))),
        ]
        .spacing(16),
        row![
            container(health).padding(16).width(Length::Fill).style(bordered_box),
            container(areas).padding(16).width(Length::Fill).style(bordered_box),
        ]
        .spacing(16),
        row![
            button("Open Map").on_press(Message::Navigate(NavRequest::SwitchView(View::Map))),
            button("Browse Inventory")
                .on_press(Message::Navigate(NavRequest::SwitchView(View::Inventory))),
            button("Add Tree")
                .style(button::secondary)
                .on_press(Message::Navigate(NavRequest::SwitchView(View::Add))),
        ]
        .spacing(12),
        text(format!("{} trees registered", summary.total)).size(13).color(MUTED),
    ]
    .spacing(20)
    .into()
}
