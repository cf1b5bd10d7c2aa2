//! Shared building blocks for the resource screens.
pub mod attachment;
pub mod connection_banner;
pub mod empty_state;
pub mod error_banner;
pub mod pico;
pub mod row_actions;
