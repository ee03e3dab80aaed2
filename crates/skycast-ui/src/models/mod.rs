pub mod display_state;
pub mod query_controller;
