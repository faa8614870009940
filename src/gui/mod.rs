mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{TreeDashboard, run};
pub use message::{Message, NavRequest};
pub use state::AppState;
