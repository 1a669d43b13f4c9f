//! # Travel Dash
//!
//! A terminal dashboard for a traveller in Kigali.
//!
//! ## Features
//! - Sidebar with six sections: Dashboard, Wallet, Accommodations,
//!   Events, Transport, Weather
//! - Wallet advice tiered on balance
//! - Current weather lookup with a drink recommendation
//! - Toast notification when the lookup fails
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (View state + section registry)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod sections;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use models::{Coordinate, Toast, WeatherReading};
pub use sections::{Fragment, Section, SectionDescriptor};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{NetworkActor, WeatherClient};
