//! Browser client for the quantum hermetic gematria scoring service.
//!
//! Everything except `app`, `components` and `pages` is free of DOM access
//! and runs natively, which is how it is tested.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod logging;
pub mod pages;
pub mod render;
pub mod view_state;
