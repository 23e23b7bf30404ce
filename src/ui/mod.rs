pub mod app;
pub mod controls;
pub mod display;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod score;
pub mod terminal_guard;
pub mod theme;
