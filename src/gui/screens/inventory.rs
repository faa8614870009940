use iced::{
    Element, Length, Task,
    widget::{Column, button, column, row, text, text_input},
};

use crate::{
    core::{query::Query, store::RecordStore},
    gui::{
        AppState, NavRequest,
        screens::{Screen, ScreenMessage},
        widgets::{MUTED, header, health_color},
    },
    models::TreeRecord,
};

#[derive(Debug, Clone, Default)]
pub struct InventoryScreen {
    query: String,
}

#[derive(Debug, Clone)]
pub enum InventoryMessage {
    QueryChanged(String),
}

impl Screen for InventoryScreen {
    type Message = InventoryMessage;
    type ParentMessage = NavRequest;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let visible = Query::new(&self.query).filter(state.store.records());
        let count = text(format!("Showing {} of {} trees", visible.len(), state.store.len()))
            .size(14)
            .color(MUTED);

        let rows = visible
            .into_iter()
            .fold(Column::new().spacing(4), |rows, tree| rows.push(tree_row(tree)));

        column![
            header("Tree Inventory", "Search and manage all registered trees"),
            text_input("Search by name, species, or area...", &self.query)
                .on_input(|query| ScreenMessage::ScreenMessage(InventoryMessage::QueryChanged(query)))
                .padding(8),
            count,
            rows,
        ]
        .spacing(16)
        .into()
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            InventoryMessage::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
        }
    }
}

fn tree_row(tree: &TreeRecord) -> Element<'_, ScreenMessage<InventoryScreen>> {
    button(
        row![
            text(format!("#{}", tree.id)).width(Length::Fixed(50.0)),
            text(tree.name.as_str()).width(Length::FillPortion(3)),
            text(tree.species.as_str()).width(Length::FillPortion(2)),
            text(tree.area.as_str()).width(Length::FillPortion(2)),
            text(tree.health.label())
                .color(health_color(tree.health))
                .width(Length::FillPortion(1)),
        ]
        .spacing(12),
    )
    .width(Length::Fill)
    .padding(10)
    .style(button::secondary)
    .on_press(ScreenMessage::ParentMessage(NavRequest::SelectTree(tree.id)))
    .into()
}
