//! # User Table TUI
//!
//! A terminal rendition of two small UI units:
//! - a click counter
//! - a user table that fetches remote user records on demand,
//!   filters them by city and renders them
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::FetchError;
pub use models::{filter_by_city, Address, Counter, User};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, UserFetchView};
pub use network::{HttpUserSource, NetworkActor, UserSource};
pub use ui::draw_ui;
