//! Admin Console - desktop GUI for the card and user admin screens.
//!
//! # Architecture
//!
//! - `app` - [`App`](app::App) with the Elm-style `new`/`update`/`view` methods
//! - `handler` - message handlers dispatched from `update`
//! - `message` - the message tree
//! - `state` - application state and per-collection services
//! - `view` / `component` - pure view functions and reusable widgets
//! - `theme` - spacing, colors and widget styles

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
