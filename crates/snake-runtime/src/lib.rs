//! Terminal runtime for tick-driven games.
//!
//! Wraps a ratatui terminal and a crossterm event source behind the [`App`]
//! trait. Ticks come from a one-shot timer that the application re-arms after
//! every tick through the [`snake_engine::TickScheduler`] implementation on
//! [`Runtime`].

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
