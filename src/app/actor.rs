//! App actor - message loop processing UI events and network responses

use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// How often toast expiry is checked
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Startup: location first, then the lookup it parameterizes
        if let Some(cmd) = self.state.initialize_location() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    match event {
                        Some(event) => {
                            if self.handle_ui_event(event) {
                                break;
                            }
                            let _ = self.render_tx.send(self.state.to_render_state());
                        }
                        None => break,
                    }
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                _ = tick.tick() => {
                    if self.state.expire_toast(Instant::now()) {
                        let _ = self.render_tx.send(self.state.to_render_state());
                    }
                }
            }
        }

        self.state.teardown();
        let _ = self.network_tx.send(NetworkCommand::Shutdown);
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Sidebar
            UiEvent::SelectSection(section) => self.state.select_section(section),
            UiEvent::NextSection => self.state.next_section(),
            UiEvent::PrevSection => self.state.prev_section(),

            // Actions
            UiEvent::TopUp => self.state.top_up(),
            UiEvent::RefreshWeather => {
                if let Some(cmd) = self.state.refresh_weather() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::DismissToast => self.state.dismiss_toast(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
