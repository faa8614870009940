//! Views without local state: measurements, analytics, reports and settings.

use iced::{
    Element, Length,
    widget::{Column, button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{geo::project, store::RecordStore},
    gui::{
        AppState, Message,
        screens::dashboard::distribution_row,
        widgets::{MUTED, header, health_color},
    },
    models::Health,
};

const REPORTS: [(&str, &str); 4] = [
    ("Monthly Summary", "Overview of tree activities and health metrics"),
    ("Species Report", "Detailed analysis by tree species"),
    ("Area Coverage", "Geographic distribution and coverage analysis"),
    ("Environmental Impact", "Carbon sequestration and ecosystem benefits"),
];

fn panel<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

pub fn measurements(state: &AppState) -> Element<'_, Message> {
    let heading = row![
        text("Tree").width(Length::FillPortion(3)),
        text("Latitude").width(Length::FillPortion(2)),
        text("Longitude").width(Length::FillPortion(2)),
        text("Map x").width(Length::FillPortion(1)),
        text("Map y").width(Length::FillPortion(1)),
    ]
    .spacing(12);

    let rows = state.store.records().iter().fold(
        Column::new().spacing(6).push(heading),
        |rows, tree| {
            let position = project(tree, &state.bounds, &state.viewport);
            rows.push(
                row![
                    text(tree.name.as_str()).width(Length::FillPortion(3)),
                    text(format!("{:.4}", tree.lat)).width(Length::FillPortion(2)),
                    text(format!("{:.4}", tree.lng)).width(Length::FillPortion(2)),
                    text(format!("{:.1}", position.x)).width(Length::FillPortion(1)),
                    text(format!("{:.1}", position.y)).width(Length::FillPortion(1)),
                ]
                .spacing(12),
            )
        },
    );

    column![
        header("Measurements", "Recorded positions of every registered tree"),
        panel(rows),
    ]
    .spacing(16)
    .into()
}

pub fn analytics(state: &AppState) -> Element<'_, Message> {
    let summary = state.summary();
    let total = summary.total.max(1) as f32;

    let shares = Health::ALL.into_iter().fold(
        Column::new().spacing(8).push(text("Health Share").size(18)),
        |column, health| {
            let count = summary.health.get(health);
            column.push(row![
                text(health.label()).color(health_color(health)).width(Length::Fixed(120.0)),
                text(format!("{:.0}%", count as f32 / total * 100.0)),
            ])
        },
    );

    let max_species = summary.species_distribution.first().map_or(0, |(_, count)| *count);
    let species = summary.species_distribution.iter().fold(
        Column::new().spacing(8).push(text("Species Distribution").size(18)),
        |column, (name, count)| column.push(distribution_row(name, *count, max_species)),
    );

    column![
        header("Analytics", "Health and species breakdown of the inventory"),
        row![panel(shares), panel(species)].spacing(16),
    ]
    .spacing(16)
    .into()
}

pub fn reports<'a>() -> Element<'a, Message> {
    let cards = REPORTS.into_iter().fold(Column::new().spacing(16), |cards, (title, description)| {
        cards.push(panel(
            column![
                text(title).size(18),
                text(description).size(14).color(MUTED),
                button("Generate Report →").style(button::text),
            ]
            .spacing(8),
        ))
    });

    column![
        header("Reports", "Generate and export tree management reports"),
        cards,
    ]
    .spacing(16)
    .into()
}

pub fn settings(state: &AppState) -> Element<'_, Message> {
    let config = &state.config;
    let data = match &config.data {
        Some(path) => path.display().to_string(),
        None => "bundled Badulla sample registry".to_string(),
    };
    let bounds = &state.bounds;

    column![
        header("Settings", "Map and registry configuration"),
        panel(
            column![
                text("Registry").size(18),
                text(format!("Source: {data}")),
                text(format!("Trees loaded: {}", state.store.len())),
                text(format!("Start view: {}", config.start_view.label())),
            ]
            .spacing(6)
        ),
        panel(
            column![
                text("Map Bounds").size(18),
                text(format!(
                    "Latitude {:.4} to {:.4}",
                    bounds.min_lat(),
                    bounds.max_lat()
                )),
                text(format!(
                    "Longitude {:.4} to {:.4}",
                    bounds.min_lng(),
                    bounds.max_lng()
                )),
                text(if config.fit_bounds_to_data {
                    "Fitted to the loaded records"
                } else {
                    "Fixed by configuration"
                })
                .color(MUTED),
            ]
            .spacing(6)
        ),
    ]
    .spacing(16)
    .into()
}
