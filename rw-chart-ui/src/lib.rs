//! Shared Dioxus components and D3.js bridge for the station levels app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, table, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
