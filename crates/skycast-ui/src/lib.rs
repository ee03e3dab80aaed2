pub mod bridge;
pub mod error_mapping;
pub mod models;
pub mod services;
pub mod view;

pub use models::display_state::DisplayState;
pub use models::query_controller::{ControllerOptions, QueryController};
pub use view::{render, View, ViewBody, ERROR_MESSAGE};
