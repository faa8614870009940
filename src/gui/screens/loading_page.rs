use iced::{
    Element,
    widget::{column, container, text},
};

use crate::gui::Message;

pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading tree registry..."))
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
}

pub fn failed(error: &str) -> Element<'_, Message> {
    container(
        column![
            text("Could not open the tree registry").size(24),
            text(error),
        ]
        .spacing(10),
    )
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
