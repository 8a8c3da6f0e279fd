//! Minimal TUI runtime: a fixed-tick event loop plus a stack of screens.
//!
//! The runtime owns the terminal (via [`ratatui::run`]) and multiplexes
//! three event kinds to the running [`App`]: simulation ticks at the
//! configured rate, render passes throttled to the same rate, and raw
//! crossterm events. Screens opt into per-screen tick rates through
//! [`Screen::on_active`].

pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event_loop;
mod runtime;
mod screen;
