//! Network actor - runs weather lookups in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::WeatherClient;

/// Network actor that processes weather lookup commands
pub struct NetworkActor {
    client: WeatherClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: WeatherClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchWeather { id, coordinate }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, %coordinate, "Fetching weather");
                                let response = match client.current(coordinate).await {
                                    Ok(reading) => {
                                        tracing::info!(id, temp_c = reading.temperature_c, condition = %reading.condition, "Weather updated");
                                        NetworkResponse::WeatherUpdated { id, reading }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, "Weather fetch failed");
                                        NetworkResponse::WeatherFailed { id, message: e.to_string() }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // Outstanding lookups must not report after teardown
                            self.active_requests.shutdown().await;
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
