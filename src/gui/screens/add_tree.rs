use iced::{
    Color, Element, Length, Task,
    widget::{button, column, pick_list, row, text, text_input},
};
use tracing::{info, warn};

use crate::{
    core::draft::TreeDraft,
    gui::{
        AppState, NavRequest,
        screens::{Screen, ScreenMessage},
        widgets::header,
    },
    models::Health,
};

const ERROR_COLOR: Color = Color {
    r: 0.86,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

#[derive(Debug, Clone, Default)]
pub struct AddTreeScreen {
    draft: TreeDraft,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AddTreeMessage {
    NameChanged(String),
    SpeciesChanged(String),
    AreaChanged(String),
    HealthSelected(Health),
    LatChanged(String),
    LngChanged(String),
    Submit,
}

fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> AddTreeMessage,
) -> Element<'a, ScreenMessage<AddTreeScreen>> {
    column![
        text(label).size(14),
        text_input(placeholder, value)
            .on_input(move |input| ScreenMessage::ScreenMessage(on_input(input)))
            .padding(8),
    ]
    .spacing(4)
    .into()
}

impl Screen for AddTreeScreen {
    type Message = AddTreeMessage;
    type ParentMessage = NavRequest;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let draft = &self.draft;
        let health = column![
            text("Health").size(14),
            pick_list(Health::ALL, draft.health.parse::<Health>().ok(), |health| {
                ScreenMessage::ScreenMessage(AddTreeMessage::HealthSelected(health))
            }),
        ]
        .spacing(4);

        let mut form = column![
            header("Add New Tree", "Register a tree in the inventory"),
            field("Name", "e.g. Mango Tree", &draft.name, AddTreeMessage::NameChanged),
            field("Species", "e.g. Mango", &draft.species, AddTreeMessage::SpeciesChanged),
            field("Area", "e.g. Central", &draft.area, AddTreeMessage::AreaChanged),
            health,
            row![
                field("Latitude", "6.9897", &draft.lat, AddTreeMessage::LatChanged),
                field("Longitude", "81.0559", &draft.lng, AddTreeMessage::LngChanged),
            ]
            .spacing(16),
        ]
        .spacing(14)
        .max_width(640.0);

        if let Some(error) = &self.error {
            form = form.push(text(error.as_str()).color(ERROR_COLOR));
        }

        form.push(
            row![
                button("Save Tree").on_press(ScreenMessage::ScreenMessage(AddTreeMessage::Submit)),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(ScreenMessage::ParentMessage(NavRequest::BackFromAdd)),
            ]
            .spacing(12),
        )
        .width(Length::Fill)
        .into()
    }

    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            AddTreeMessage::NameChanged(value) => self.draft.name = value,
            AddTreeMessage::SpeciesChanged(value) => self.draft.species = value,
            AddTreeMessage::AreaChanged(value) => self.draft.area = value,
            AddTreeMessage::HealthSelected(health) => self.draft.health = health.label().to_string(),
            AddTreeMessage::LatChanged(value) => self.draft.lat = value,
            AddTreeMessage::LngChanged(value) => self.draft.lng = value,
            AddTreeMessage::Submit => {
                return match self.draft.validate(&state.bounds) {
                    Ok(tree) => {
                        if tree.outside_bounds {
                            warn!(lat = tree.lat, lng = tree.lng, "new tree lies outside the map bounds");
                        }
                        info!(name = %tree.name, species = %tree.species, area = %tree.area, "tree submitted to the registry");
                        *self = Self::default();
                        Task::done(ScreenMessage::ParentMessage(NavRequest::BackFromAdd))
                    }
                    Err(error) => {
                        self.error = Some(error.to_string());
                        Task::none()
                    }
                };
            }
        }
        self.error = None;
        Task::none()
    }
}
