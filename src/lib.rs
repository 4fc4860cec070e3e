//! # TaskFlow
//!
//! A terminal client for the TaskFlow Manager REST service: a filterable task
//! list, a create/edit form, quick status changes, deletion with confirmation
//! and an analytics dashboard.
//!
//! ## Layout
//!
//! - [`api`]: HTTP client and the [`api::TaskService`] seam
//! - [`libs::store`]: task list and analytics, refreshed after every mutation
//! - [`libs::form`]: draft state and validation for create and edit
//! - [`libs::view`]: pure rendering and user intents
//! - [`libs::app`]: the session that ties them together
//! - [`commands`]: the command-line surface
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
