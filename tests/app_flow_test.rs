//! App actor flow over channels, with the test standing in for the network layer

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use travel_dash::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use travel_dash::sections::{describe, SectionContext, RAINY_DRINK, SUNNY_DRINK};
use travel_dash::{AppActor, Config, Coordinate, Fragment, Section, WeatherReading};

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
    net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
    handle: tokio::task::JoinHandle<()>,
}

fn spawn_app(config: &Config) -> Harness {
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
    let (render_tx, render_rx) = mpsc::unbounded_channel();

    let actor = AppActor::new(config, net_cmd_tx, render_tx);
    let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

    Harness {
        ui_tx,
        net_cmd_rx,
        net_resp_tx,
        render_rx,
        handle,
    }
}

async fn next_render(rx: &mut mpsc::UnboundedReceiver<RenderState>) -> RenderState {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("render state in time")
        .expect("render channel open")
}

async fn next_command(rx: &mut mpsc::UnboundedReceiver<NetworkCommand>) -> NetworkCommand {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("network command in time")
        .expect("network channel open")
}

fn has_text(state: &RenderState, text: &str) -> bool {
    state
        .descriptor
        .content
        .contains(&Fragment::Text(text.to_string()))
}

#[tokio::test]
async fn test_startup_issues_exactly_one_fetch() {
    let mut h = spawn_app(&Config::default());

    let cmd = next_command(&mut h.net_cmd_rx).await;
    assert!(matches!(
        cmd,
        NetworkCommand::FetchWeather { coordinate, .. } if coordinate == Coordinate::new(-1.9441, 30.0619)
    ));

    let initial = next_render(&mut h.render_rx).await;
    assert_eq!(initial.location, Some(Coordinate::kigali()));
    assert_eq!(initial.weather, WeatherReading::default());
    assert_eq!(initial.active_section, Section::Dashboard);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(h.net_cmd_rx.try_recv().is_err(), "no second fetch");

    h.ui_tx.send(UiEvent::Quit).unwrap();
    assert_eq!(next_command(&mut h.net_cmd_rx).await, NetworkCommand::Shutdown);
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_every_section_renders_its_own_descriptor() {
    let config = Config::default();
    let mut h = spawn_app(&config);
    next_command(&mut h.net_cmd_rx).await;
    next_render(&mut h.render_rx).await;

    let weather = WeatherReading::default();
    let ctx = SectionContext {
        user_name: &config.user_name,
        wallet_balance: config.starting_balance,
        weather: &weather,
    };

    for section in Section::ALL {
        h.ui_tx.send(UiEvent::SelectSection(section)).unwrap();
        let state = next_render(&mut h.render_rx).await;
        let expected = describe(section, &ctx);
        assert_eq!(state.active_section, section);
        assert_eq!(state.descriptor.title, expected.title);
        assert_eq!(state.descriptor.subtitle, expected.subtitle);
    }

    h.ui_tx.send(UiEvent::Quit).unwrap();
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_successful_fetch_changes_drink_recommendation() {
    let mut h = spawn_app(&Config::default());
    let id = match next_command(&mut h.net_cmd_rx).await {
        NetworkCommand::FetchWeather { id, .. } => id,
        other => panic!("unexpected {:?}", other),
    };
    next_render(&mut h.render_rx).await;

    h.ui_tx.send(UiEvent::SelectSection(Section::Weather)).unwrap();
    let before = next_render(&mut h.render_rx).await;
    assert!(has_text(&before, RAINY_DRINK));

    h.net_resp_tx
        .send(NetworkResponse::WeatherUpdated {
            id,
            reading: WeatherReading::new(25.0, "Sunny"),
        })
        .unwrap();
    let after = next_render(&mut h.render_rx).await;
    assert_eq!(after.weather, WeatherReading::new(25.0, "Sunny"));
    assert!(has_text(&after, SUNNY_DRINK));
    assert!(has_text(&after, "Current weather: 25°C, Sunny"));
    assert!(after.toast.is_none());

    h.ui_tx.send(UiEvent::Quit).unwrap();
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_fetch_raises_one_toast() {
    let mut h = spawn_app(&Config::default());
    let id = match next_command(&mut h.net_cmd_rx).await {
        NetworkCommand::FetchWeather { id, .. } => id,
        other => panic!("unexpected {:?}", other),
    };
    next_render(&mut h.render_rx).await;

    h.net_resp_tx
        .send(NetworkResponse::WeatherFailed {
            id,
            message: "Network response was not ok".to_string(),
        })
        .unwrap();
    let state = next_render(&mut h.render_rx).await;
    assert_eq!(state.weather, WeatherReading::default());
    let toast = state.toast.expect("toast");
    assert_eq!(toast.title, "Error fetching weather data");
    assert_eq!(toast.message, "Network response was not ok");

    // A duplicate completion for the same id is stale now
    h.net_resp_tx
        .send(NetworkResponse::WeatherFailed {
            id,
            message: "again".to_string(),
        })
        .unwrap();
    let state = next_render(&mut h.render_rx).await;
    assert_eq!(state.toast.map(|t| t.message).as_deref(), Some("Network response was not ok"));

    h.ui_tx.send(UiEvent::DismissToast).unwrap();
    let state = next_render(&mut h.render_rx).await;
    assert!(state.toast.is_none());

    h.ui_tx.send(UiEvent::Quit).unwrap();
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_top_up_leaves_balance_alone() {
    let config = Config {
        starting_balance: 499,
        ..Config::default()
    };
    let mut h = spawn_app(&config);
    next_command(&mut h.net_cmd_rx).await;
    next_render(&mut h.render_rx).await;

    h.ui_tx.send(UiEvent::SelectSection(Section::Wallet)).unwrap();
    next_render(&mut h.render_rx).await;
    h.ui_tx.send(UiEvent::TopUp).unwrap();
    let state = next_render(&mut h.render_rx).await;

    assert_eq!(state.wallet_balance, 499);
    assert!(has_text(&state, "Wallet balance: 499 RWF"));
    assert!(has_text(&state, travel_dash::sections::LOW_BALANCE_ADVICE));

    h.ui_tx.send(UiEvent::Quit).unwrap();
    h.handle.await.unwrap();
}

#[tokio::test]
async fn test_manual_refresh_issues_new_request() {
    let mut h = spawn_app(&Config::default());
    let first = match next_command(&mut h.net_cmd_rx).await {
        NetworkCommand::FetchWeather { id, .. } => id,
        other => panic!("unexpected {:?}", other),
    };

    h.ui_tx.send(UiEvent::RefreshWeather).unwrap();
    match next_command(&mut h.net_cmd_rx).await {
        NetworkCommand::FetchWeather { id, coordinate } => {
            assert!(id > first);
            assert_eq!(coordinate, Coordinate::kigali());
        }
        other => panic!("unexpected {:?}", other),
    }

    h.ui_tx.send(UiEvent::Quit).unwrap();
    h.handle.await.unwrap();
}
