//! # medalwatch - athlete results widget
//!
//! Polls an athlete results feed and renders medal cards as HTML into a
//! single mount point, re-rendering whenever the feed's version changes.
//!
//! ## Architecture
//!
//! - **App**: poll loop, owns the poll state and the mount
//! - **API**: feed client and payload validation
//! - **State**: domain types, event classification, poll state machine
//! - **UI**: HTML rendering and output mounts
//! - **Scheduler**: fixed-interval poll timer
//! - **Config**: configuration management
//! - **Logging**: tracing subscriber setup

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use state::{Payload, classify};
pub use ui::Ui;
