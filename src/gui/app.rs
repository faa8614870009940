use iced::{Element, Task};
use tracing::error;

use crate::{
    config::Config,
    core::{nav::View, store::InMemoryStore},
    gui::{
        AppState, Message,
        screens::{Screen, ScreenMessage, Screens, dashboard, loading_page, panels},
        widgets::layout,
    },
};

enum Phase {
    Loading,
    Failed(String),
    Ready(Box<Ready>),
}

struct Ready {
    state: AppState,
    screens: Screens,
}

pub struct TreeDashboard {
    config: Config,
    phase: Phase,
}

impl TreeDashboard {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let load = match config.data.clone() {
            Some(path) => Task::perform(
                async move { InMemoryStore::load(path).await.map_err(|e| e.to_string()) },
                Message::RegistryLoaded,
            ),
            None => Task::done(Message::RegistryLoaded(Ok(InMemoryStore::sample()))),
        };
        (
            Self {
                config,
                phase: Phase::Loading,
            },
            load,
        )
    }

    pub fn title(&self) -> String {
        match &self.phase {
            Phase::Ready(ready) => format!("Urban Trees - {}", ready.state.nav.active_view().label()),
            Phase::Loading | Phase::Failed(_) => "Urban Trees".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RegistryLoaded(result) => {
                if matches!(self.phase, Phase::Loading) {
                    self.phase = self.open(result);
                }
                Task::none()
            }
            message => match &mut self.phase {
                Phase::Ready(ready) => ready.update(message),
                Phase::Loading | Phase::Failed(_) => Task::none(),
            },
        }
    }

    fn open(&self, loaded: Result<InMemoryStore, String>) -> Phase {
        let state = loaded.and_then(|store| {
            AppState::new(&self.config, store).map_err(|e| format!("{:#}", e))
        });
        match state {
            Ok(state) => Phase::Ready(Box::new(Ready {
                state,
                screens: Screens::default(),
            })),
            Err(message) => {
                error!(%message, "failed to open the tree registry");
                Phase::Failed(message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Loading => loading_page::loading(),
            Phase::Failed(error) => loading_page::failed(error),
            Phase::Ready(ready) => ready.view(),
        }
    }
}

impl Ready {
    fn update(&mut self, message: Message) -> Task<Message> {
        let state = &mut self.state;
        match message {
            Message::RegistryLoaded(_) => Task::none(),
            Message::Navigate(request) => {
                state.navigate(request);
                Task::none()
            }
            Message::Map(ScreenMessage::ScreenMessage(msg)) => {
                self.screens.map.update(msg, state).map(Message::Map)
            }
            Message::Map(ScreenMessage::ParentMessage(request)) => {
                state.navigate(request);
                Task::none()
            }
            Message::Inventory(ScreenMessage::ScreenMessage(msg)) => {
                self.screens.inventory.update(msg, state).map(Message::Inventory)
            }
            Message::Inventory(ScreenMessage::ParentMessage(request)) => {
                state.navigate(request);
                Task::none()
            }
            Message::Details(ScreenMessage::ScreenMessage(msg)) => {
                self.screens.details.update(msg, state).map(Message::Details)
            }
            Message::Details(ScreenMessage::ParentMessage(request)) => {
                state.navigate(request);
                Task::none()
            }
            Message::AddTree(ScreenMessage::ScreenMessage(msg)) => {
                self.screens.add_tree.update(msg, state).map(Message::AddTree)
            }
            Message::AddTree(ScreenMessage::ParentMessage(request)) => {
                state.navigate(request);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let state = &self.state;
        let active = state.nav.active_view();
        let content = match active {
            View::Dashboard => dashboard::view(state),
            View::Map => self.screens.map.view(state).map(Message::Map),
            View::Inventory => self.screens.inventory.view(state).map(Message::Inventory),
            View::Measurements => panels::measurements(state),
            View::Analytics => panels::analytics(state),
            View::Add => self.screens.add_tree.view(state).map(Message::AddTree),
            View::Details => self.screens.details.view(state).map(Message::Details),
            View::Reports => panels::reports(),
            View::Settings => panels::settings(state),
        };
        layout(active, content)
    }
}

pub fn run(config: Config) -> iced::Result {
    iced::application(
        move || TreeDashboard::new(config.clone()),
        TreeDashboard::update,
        TreeDashboard::view,
    )
    .title(TreeDashboard::title)
    .run()
}
