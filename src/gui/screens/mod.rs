pub mod add_tree;
pub mod dashboard;
pub mod details;
pub mod inventory;
pub mod loading_page;
pub mod map;
pub mod panels;

use iced::{Element, Task};

use crate::gui::AppState;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

/// A view with local state of its own (search text, form input, ...).
/// Transitions go back to the app as parent messages.
pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ScreenMessage<Self>>;
}

/// Screens keep their local state while another view is active.
#[derive(Debug, Clone, Default)]
pub struct Screens {
    pub map: map::MapScreen,
    pub inventory: inventory::InventoryScreen,
    pub details: details::DetailsScreen,
    pub add_tree: add_tree::AddTreeScreen,
}
