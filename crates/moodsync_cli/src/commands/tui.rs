//! Wire the engine, the auth task, and the TUI thread together.
//!
//! Three tasks: the engine loop (tokio), the auth task (tokio, serving login/
//! logout requests from the login screen), and the TUI itself on a blocking
//! thread. Tearing down the TUI cancels the engine token, which cancels every
//! pending timer and in-flight emission.

use std::sync::Arc;

use moodsync_auth::{Access, AuthClient, SessionGate, TokenStore};
use moodsync_llms::ChatRelay;
use moodsync_observability::{LogSink, ObservabilityConfig};
use moodsync_tui::theme::Appearance;
use moodsync_tui::{run_tui, AuthOutcome, AuthRequest, Screen, TuiChannels};
use moodsync_wellness::{EngineConfig, WellnessEngine};
use tokio::sync::mpsc;
use tracing::info;

use crate::commands::{build_provider, resolve_provider_kind};

pub async fn run(provider: Option<String>, light: bool, log_level: &str) -> anyhow::Result<()> {
    // Runtime logs go to the debug traces screen, not the terminal.
    let (log_tx, log_rx) = mpsc::channel::<String>(256);
    let sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    moodsync_observability::init(
        ObservabilityConfig::new(moodsync_constant::app::NAME)
            .with_console(false)
            .with_log_level(log_level)
            .with_log_sink(sink),
    )?;

    let store = TokenStore::new()?;
    let gate = SessionGate::new(store);
    let initial = match gate.check() {
        Access::Granted { .. } => Screen::Main,
        Access::LoginRequired => Screen::Login,
    };

    let kind = resolve_provider_kind(provider);
    let relay = ChatRelay::from_arc(build_provider(kind));

    let (event_tx, event_rx) = mpsc::channel(256);
    let (command_tx, command_rx) = mpsc::channel(64);
    let engine = WellnessEngine::new(EngineConfig::new(), relay, event_tx);
    let cancel = engine.cancel_token();
    let seed_messages = engine.transcript().messages().to_vec();
    let engine_task = tokio::spawn(engine.run(command_rx));

    // Auth task: serves the login form without blocking the UI thread.
    let (auth_request_tx, mut auth_request_rx) = mpsc::channel::<AuthRequest>(16);
    let (auth_outcome_tx, auth_outcome_rx) = mpsc::channel::<AuthOutcome>(16);
    let auth_client = AuthClient::from_env();
    let auth_gate = gate.clone();
    let auth_task = tokio::spawn(async move {
        while let Some(request) = auth_request_rx.recv().await {
            let outcome = match request {
                AuthRequest::Login { email, password } => {
                    match auth_client.login(email, password).await {
                        Ok(response) => match auth_gate.establish(&response.token) {
                            Ok(()) => {
                                info!("login succeeded, token stored");
                                AuthOutcome::LoggedIn
                            }
                            Err(error) => AuthOutcome::Failed(error.to_string()),
                        },
                        Err(error) => AuthOutcome::Failed(error.to_string()),
                    }
                }
                AuthRequest::Logout => {
                    let _ = auth_gate.logout();
                    info!("logged out, token cleared");
                    AuthOutcome::LoggedOut
                }
            };
            if auth_outcome_tx.send(outcome).await.is_err() {
                break;
            }
        }
    });

    let appearance = if light {
        Appearance::Light
    } else {
        Appearance::Dark
    };
    let channels = TuiChannels {
        events: event_rx,
        commands: command_tx,
        auth_requests: auth_request_tx,
        auth_outcomes: auth_outcome_rx,
        logs: Some(log_rx),
    };
    let tui_task =
        tokio::task::spawn_blocking(move || run_tui(initial, appearance, seed_messages, channels));

    let result = tui_task.await?;

    // TUI gone: cancel everything still pending and wait for the engine.
    cancel.cancel();
    let _ = engine_task.await;
    auth_task.abort();

    result
}
