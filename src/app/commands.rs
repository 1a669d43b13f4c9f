//! Command handlers - business logic for processing UI events

use std::time::Instant;

use crate::app::AppState;
use crate::constants::WEATHER_ERROR_TITLE;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Coordinate, Toast};
use crate::sections::Section;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn select_section(&mut self, section: Section) {
        tracing::debug!(section = %section, "Section selected");
        self.active_section = section;
    }

    pub fn next_section(&mut self) {
        self.select_section(self.active_section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.active_section.prev());
    }

    // ========================
    // Location & weather
    // ========================

    /// Set the mocked location and request weather for it.
    ///
    /// Only the first call has an effect: the coordinate is never replaced
    /// and later calls issue no lookup.
    pub fn initialize_location(&mut self) -> Option<NetworkCommand> {
        if self.location.is_some() {
            return None;
        }
        let coordinate = Coordinate::kigali();
        tracing::info!(%coordinate, "Location initialized");
        self.location = Some(coordinate);
        self.refresh_weather()
    }

    /// Build a lookup for the current location, if there is one
    pub fn refresh_weather(&mut self) -> Option<NetworkCommand> {
        if !self.alive {
            return None;
        }
        let coordinate = self.location?;
        let id = self.next_id();
        self.pending_request_id = Some(id);
        Some(NetworkCommand::FetchWeather { id, coordinate })
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if !self.alive {
            tracing::debug!(id = response.id(), "Dropping response after teardown");
            return;
        }
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::WeatherUpdated { reading, .. } => {
                self.weather = reading;
            }
            NetworkResponse::WeatherFailed { message, .. } => {
                self.toast = Some(Toast::destructive(WEATHER_ERROR_TITLE, message));
            }
        }
    }

    // ========================
    // Wallet
    // ========================

    /// Top-up has no backing payment flow; the balance stays as is.
    pub fn top_up(&mut self) {
        tracing::info!(balance = self.wallet_balance, "Top-up requested");
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Returns true if a toast was removed
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        match &self.toast {
            Some(toast) if toast.is_expired(now, self.toast_timeout) => {
                self.toast = None;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Lifecycle
    // ========================

    pub fn teardown(&mut self) {
        self.alive = false;
        self.pending_request_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherReading;
    use crate::sections::{RAINY_DRINK, SUNNY_DRINK};
    use crate::sections::Fragment;
    use std::time::Duration;

    fn started() -> (AppState, u64) {
        let mut state = AppState::default();
        match state.initialize_location() {
            Some(NetworkCommand::FetchWeather { id, .. }) => (state, id),
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_initialize_location_once() {
        let mut state = AppState::default();
        assert_eq!(state.location, None);

        let cmd = state.initialize_location();
        assert_eq!(
            cmd,
            Some(NetworkCommand::FetchWeather {
                id: 1,
                coordinate: Coordinate::new(-1.9441, 30.0619),
            })
        );
        assert_eq!(state.location, Some(Coordinate::new(-1.9441, 30.0619)));

        assert_eq!(state.initialize_location(), None);
        assert_eq!(state.location, Some(Coordinate::kigali()));
    }

    #[test]
    fn test_refresh_requires_location() {
        let mut state = AppState::default();
        assert_eq!(state.refresh_weather(), None);
        assert_eq!(state.pending_request_id, None);
    }

    #[test]
    fn test_successful_fetch_replaces_reading() {
        let (mut state, id) = started();
        state.select_section(Section::Weather);
        assert!(state
            .current_descriptor()
            .content
            .contains(&Fragment::Text(RAINY_DRINK.to_string())));

        state.handle_response(NetworkResponse::WeatherUpdated {
            id,
            reading: WeatherReading::new(25.0, "Sunny"),
        });

        assert_eq!(state.weather, WeatherReading::new(25.0, "Sunny"));
        assert!(state.toast.is_none());
        assert!(state
            .current_descriptor()
            .content
            .contains(&Fragment::Text(SUNNY_DRINK.to_string())));
    }

    #[test]
    fn test_failed_fetch_keeps_reading_and_raises_toast() {
        let (mut state, id) = started();
        state.handle_response(NetworkResponse::WeatherFailed {
            id,
            message: "Network response was not ok".to_string(),
        });

        assert_eq!(state.weather, WeatherReading::default());
        let toast = state.toast.as_ref().expect("toast raised");
        assert_eq!(toast.title, WEATHER_ERROR_TITLE);
        assert_eq!(toast.message, "Network response was not ok");
    }

    #[test]
    fn test_stale_and_post_teardown_responses_ignored() {
        let (mut state, id) = started();
        state.handle_response(NetworkResponse::WeatherUpdated {
            id: id + 42,
            reading: WeatherReading::new(1.0, "Snow"),
        });
        assert_eq!(state.weather, WeatherReading::default());

        state.teardown();
        state.handle_response(NetworkResponse::WeatherFailed {
            id,
            message: "boom".to_string(),
        });
        assert!(state.toast.is_none());
        assert_eq!(state.refresh_weather(), None);
    }

    #[test]
    fn test_top_up_is_inert() {
        let mut state = AppState::default();
        state.top_up();
        assert_eq!(state.wallet_balance, 1000);
    }

    #[test]
    fn test_toast_expires_after_timeout() {
        let (mut state, id) = started();
        state.handle_response(NetworkResponse::WeatherFailed {
            id,
            message: "timeout".to_string(),
        });
        let raised = state.toast.as_ref().map(|t| t.raised_at).unwrap();
        assert!(!state.expire_toast(raised));
        assert!(state.expire_toast(raised + Duration::from_secs(5)));
        assert!(state.toast.is_none());
    }
}
