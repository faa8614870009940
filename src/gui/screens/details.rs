use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::geo::project,
    gui::{
        AppState, NavRequest,
        screens::{Screen, ScreenMessage},
        widgets::{MUTED, header, health_color, stat_card},
    },
    models::TreeRecord,
};

#[derive(Debug, Clone, Default)]
pub struct DetailsScreen;

impl Screen for DetailsScreen {
    type Message = Infallible;
    type ParentMessage = NavRequest;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let back = button("← Back to Inventory")
            .style(button::text)
            .on_press(ScreenMessage::ParentMessage(NavRequest::BackFromDetails));

        let body = match state.selected_record() {
            Some(tree) => record(tree, state),
            None => not_found(state),
        };

        column![back, body].spacing(16).into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn record<'a>(tree: &'a TreeRecord, state: &AppState) -> Element<'a, ScreenMessage<DetailsScreen>> {
    let position = project(tree, &state.bounds, &state.viewport);
    let on_map = if position.is_within(&state.viewport) {
        format!("{:.1}% across, {:.1}% down", position.x, position.y)
    } else {
        "outside the map area".to_string()
    };

    column![
        header(&tree.name, &format!("Tree #{} · {}", tree.id, tree.species)),
        row![
            stat_card("Health", tree.health.label(), Some(health_color(tree.health))),
            stat_card("Area", tree.area.as_str(), None),
            stat_card("Species", tree.species.as_str(), None),
        ]
        .spacing(16),
        container(
            column![
                text("Location").size(18),
                text(format!("Latitude {:.4}, longitude {:.4}", tree.lat, tree.lng)),
                text(format!("Map position: {on_map}")).color(MUTED),
            ]
            .spacing(6),
        )
        .padding(16)
        .width(Length::Fill)
        .style(bordered_box),
    ]
    .spacing(16)
    .into()
}

fn not_found<'a>(state: &AppState) -> Element<'a, ScreenMessage<DetailsScreen>> {
    let message = match state.nav.selected_tree() {
        Some(id) => format!("No tree with id #{id} is registered."),
        None => "No tree is selected.".to_string(),
    };
    container(
        column![
            text("Tree not found").size(24),
            text(message).color(MUTED),
            button("Browse the inventory")
                .on_press(ScreenMessage::ParentMessage(NavRequest::BackFromDetails)),
        ]
        .spacing(10),
    )
    .padding(24)
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}
