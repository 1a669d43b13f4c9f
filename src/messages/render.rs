//! Render state - data structure sent from App layer to UI for rendering

use crate::models::{Coordinate, Toast, WeatherReading};
use crate::sections::{describe, Section, SectionContext, SectionDescriptor};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub active_section: Section,
    pub descriptor: SectionDescriptor,

    pub weather: WeatherReading,
    pub wallet_balance: i64,
    pub location: Option<Coordinate>,

    // Popups
    pub toast: Option<Toast>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let weather = WeatherReading::default();
        let ctx = SectionContext {
            user_name: "",
            wallet_balance: 0,
            weather: &weather,
        };
        RenderState {
            active_section: Section::Dashboard,
            descriptor: describe(Section::Dashboard, &ctx),
            weather,
            wallet_balance: 0,
            location: None,
            toast: None,
            show_help: false,
        }
    }
}
