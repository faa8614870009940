//! Active view and tree selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::models::TreeId;

/// Every full-screen panel of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Map,
    Inventory,
    Measurements,
    Analytics,
    Add,
    Details,
    Reports,
    Settings,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Dashboard,
        View::Map,
        View::Inventory,
        View::Measurements,
        View::Analytics,
        View::Add,
        View::Details,
        View::Reports,
        View::Settings,
    ];

    /// Views reachable from the sidebar, in display order. Details is only
    /// entered by selecting a tree.
    pub fn sidebar() -> &'static [View] {
        &[
            View::Dashboard,
            View::Map,
            View::Inventory,
            View::Measurements,
            View::Analytics,
            View::Add,
            View::Reports,
            View::Settings,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Map => "map",
            View::Inventory => "inventory",
            View::Measurements => "measurements",
            View::Analytics => "analytics",
            View::Add => "add",
            View::Details => "details",
            View::Reports => "reports",
            View::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Map => "Tree Map",
            View::Inventory => "Inventory",
            View::Measurements => "Measurements",
            View::Analytics => "Analytics",
            View::Add => "Add Tree",
            View::Details => "Tree Details",
            View::Reports => "Reports",
            View::Settings => "Settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.key() == value)
            .ok_or_else(|| Error::UnknownView(value.to_string()))
    }
}

/// `selected_tree` is only ever set while `active_view` is [`View::Details`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active_view: View,
    pub selected_tree: Option<TreeId>,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: ViewState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on `view` instead of the dashboard, with nothing selected.
    pub fn starting_at(view: View) -> Self {
        Self {
            state: ViewState {
                active_view: view,
                selected_tree: None,
            },
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn active_view(&self) -> View {
        self.state.active_view
    }

    pub fn selected_tree(&self) -> Option<TreeId> {
        self.state.selected_tree
    }

    /// Open the details view for `id`. The id is not checked against the
    /// registry; the details view renders a not-found state instead.
    pub fn select_tree(&mut self, id: TreeId) {
        debug!(from = %self.state.active_view, tree = id, "select tree");
        self.state = ViewState {
            active_view: View::Details,
            selected_tree: Some(id),
        };
    }

    /// Leaving details always lands on the inventory list.
    pub fn go_back_from_details(&mut self) {
        debug!(from = %self.state.active_view, "back from details");
        self.state = ViewState {
            active_view: View::Inventory,
            selected_tree: None,
        };
    }

    /// Leaving the add-tree form always lands on the dashboard.
    pub fn go_back_from_add(&mut self) {
        debug!(from = %self.state.active_view, "back from add");
        self.state = ViewState {
            active_view: View::Dashboard,
            selected_tree: None,
        };
    }

    /// Tab switch. Always drops the selection.
    pub fn switch_view(&mut self, view: View) {
        debug!(from = %self.state.active_view, to = %view, "switch view");
        self.state = ViewState {
            active_view: view,
            selected_tree: None,
        };
    }
}
