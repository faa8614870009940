use crate::{
    core::{nav::View, store::InMemoryStore},
    gui::screens::{
        ScreenMessage, add_tree::AddTreeScreen, details::DetailsScreen,
        inventory::InventoryScreen, map::MapScreen,
    },
    models::TreeId,
};

/// A transition requested by a screen or the sidebar. Applied to the
/// navigation controller by [`AppState::navigate`](crate::gui::AppState::navigate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    SelectTree(TreeId),
    BackFromDetails,
    BackFromAdd,
    SwitchView(View),
}

#[derive(Debug, Clone)]
pub enum Message {
    RegistryLoaded(Result<InMemoryStore, String>),
    Navigate(NavRequest),
    Map(ScreenMessage<MapScreen>),
    Inventory(ScreenMessage<InventoryScreen>),
    Details(ScreenMessage<DetailsScreen>),
    AddTree(ScreenMessage<AddTreeScreen>),
}
