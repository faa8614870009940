use tracing::warn;

use crate::{
    config::Config,
    core::{
        geo::{GeoBounds, Viewport},
        nav::NavigationController,
        stats::Summary,
        store::{InMemoryStore, RecordStore},
    },
    gui::message::NavRequest,
    models::TreeRecord,
};

/// Session state shared by every screen. Owned by the app and passed down
/// explicitly.
#[derive(Debug)]
pub struct AppState {
    pub nav: NavigationController,
    pub store: InMemoryStore,
    pub bounds: GeoBounds,
    pub viewport: Viewport,
    pub config: Config,
}

impl AppState {
    pub fn new(config: &Config, store: InMemoryStore) -> anyhow::Result<Self> {
        let bounds = config.resolve_bounds(&store)?;
        let viewport = config.viewport()?;
        Ok(Self {
            nav: NavigationController::starting_at(config.start_view),
            store,
            bounds,
            viewport,
            config: config.clone(),
        })
    }

    pub fn navigate(&mut self, request: NavRequest) {
        match request {
            NavRequest::SelectTree(id) => {
                if self.store.get(id).is_none() {
                    warn!(tree = id, "selected tree is not in the registry");
                }
                self.nav.select_tree(id)
            }
            NavRequest::BackFromDetails => self.nav.go_back_from_details(),
            NavRequest::BackFromAdd => self.nav.go_back_from_add(),
            NavRequest::SwitchView(view) => self.nav.switch_view(view),
        }
    }

    /// The record behind the current selection, if it exists.
    pub fn selected_record(&self) -> Option<&TreeRecord> {
        self.nav.selected_tree().and_then(|id| self.store.get(id))
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.store.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::View;

    fn state() -> AppState {
        AppState::new(&Config::default(), InMemoryStore::sample()).unwrap()
    }

    #[test]
    fn selecting_a_tree_resolves_its_record() {
        let mut state = state();
        state.navigate(NavRequest::SelectTree(5));
        assert_eq!(state.nav.active_view(), View::Details);
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Neem Tree"));
    }

    #[test]
    fn unknown_tree_gives_empty_details() {
        let mut state = state();
        state.navigate(NavRequest::SelectTree(404));
        assert_eq!(state.nav.selected_tree(), Some(404));
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn requests_map_onto_transitions() {
        let mut state = state();
        state.navigate(NavRequest::SelectTree(1));
        state.navigate(NavRequest::BackFromDetails);
        assert_eq!(state.nav.active_view(), View::Inventory);

        state.navigate(NavRequest::SwitchView(View::Add));
        state.navigate(NavRequest::BackFromAdd);
        assert_eq!(state.nav.active_view(), View::Dashboard);
        assert_eq!(state.nav.selected_tree(), None);
    }

    #[test]
    fn degenerate_viewport_is_rejected_at_startup() {
        let mut config = Config::default();
        config.viewport.width = 0.0;
        assert!(AppState::new(&config, InMemoryStore::sample()).is_err());
    }

    #[test]
    fn starts_on_the_configured_view() {
        let config = Config {
            start_view: View::Map,
            ..Config::default()
        };
        let state = AppState::new(&config, InMemoryStore::sample()).unwrap();
        assert_eq!(state.nav.active_view(), View::Map);
        assert_eq!(state.summary().total, 6);
    }
}
