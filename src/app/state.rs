//! App state - pure data structure with no I/O logic

use std::time::Duration;

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{Coordinate, Toast, WeatherReading};
use crate::sections::{describe, registry, Section, SectionContext, SectionDescriptor};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub active_section: Section,

    // View model
    pub weather: WeatherReading,
    pub wallet_balance: i64,
    pub location: Option<Coordinate>,
    pub user_name: String,

    // Weather lookups
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    /// Cleared on teardown; late completions are dropped
    pub alive: bool,

    // Popups
    pub toast: Option<Toast>,
    pub toast_timeout: Duration,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            active_section: Section::default(),
            weather: WeatherReading::default(),
            wallet_balance: config.starting_balance,
            location: None,
            user_name: config.user_name.clone(),
            next_request_id: 1,
            pending_request_id: None,
            alive: true,
            toast: None,
            toast_timeout: config.toast_timeout(),
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn section_context(&self) -> SectionContext<'_> {
        SectionContext {
            user_name: &self.user_name,
            wallet_balance: self.wallet_balance,
            weather: &self.weather,
        }
    }

    /// Descriptor for the active section, derived fresh
    pub fn current_descriptor(&self) -> SectionDescriptor {
        describe(self.active_section, &self.section_context())
    }

    pub fn descriptors(&self) -> Vec<(Section, SectionDescriptor)> {
        registry(&self.section_context())
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_section: self.active_section,
            descriptor: self.current_descriptor(),
            weather: self.weather.clone(),
            wallet_balance: self.wallet_balance,
            location: self.location,
            toast: self.toast.clone(),
            show_help: self.show_help,
        }
    }
}
