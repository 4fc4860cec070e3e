//! Core library modules for taskflow.
//!
//! - **Domain**: task types, filters and analytics shapes
//! - **State**: the task store, the form model and the session root
//! - **Presentation**: rendering, formatting and user-facing messages
//! - **Infrastructure**: configuration

pub mod app;
pub mod config;
pub mod form;
pub mod formatter;
pub mod messages;
pub mod store;
pub mod task;
pub mod view;
