use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use clap::Parser;
use scorer::SentimentScorer;
use shared::protocol::{ClientMessage, ServerMessage};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod gauge;
mod page;
mod session;

use app_state::AppState;
use config::{load_settings, parse_bind_addr, LoadedSettings, DEFAULT_LOG_FILTER};
use session::{decode_client_message, Session};

#[derive(Parser, Debug)]
#[command(about = "Serves the sentiment gauge dashboard")]
struct Cli {
    /// Settings file; missing files are ignored.
    #[arg(long, default_value = "server.toml")]
    config: PathBuf,
    /// Overrides the configured bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Log at debug level.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let LoadedSettings {
        mut settings,
        warnings,
    } = load_settings(&cli.config);
    if let Some(bind) = cli.bind {
        settings.server_bind = bind;
    }
    if cli.debug {
        settings.log_filter = "debug".into();
    }

    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for warning in &warnings {
        warn!(config = %cli.config.display(), "{warning}");
    }

    let scorer = SentimentScorer::load().map_err(|error| {
        error!(%error, "sentiment lexicon failed to load; not serving");
        error
    })?;

    let state = AppState {
        scorer,
        max_input_bytes: settings.max_input_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr = parse_bind_addr(&settings.server_bind)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    // The input starts empty, so the first gauge is the one for "".
    let figure = gauge::figure_for(&state.scorer.score(""));
    Html(page::render_index(&gauge::render_svg(&figure)))
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.max_message_size(state.max_input_bytes)
        .on_upgrade(move |socket| ws_connection(state, socket))
}

async fn ws_connection(state: Arc<AppState>, mut socket: WebSocket) {
    let mut session = Session::new(state.scorer.clone());
    debug!("update channel opened");

    while let Some(frame) = socket.recv().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(error) => {
                debug!(%error, "update channel read failed");
                break;
            }
        };

        let sent = match decode_client_message(&text) {
            Ok(ClientMessage::InputChanged { text }) => {
                recompute(&mut socket, &mut session, &text).await
            }
            Err(exception) => {
                let rejection = session.reject(exception);
                push(&mut socket, &rejection).await
            }
        };

        if let Err(error) = sent {
            debug!(%error, "update channel write failed");
            break;
        }
    }

    debug!(phase = ?session.phase(), "update channel closed");
}

/// Computing is announced before scoring so the page can show its loading indicator.
async fn recompute(socket: &mut WebSocket, session: &mut Session, text: &str) -> anyhow::Result<()> {
    let computing = session.begin();
    push(socket, &computing).await?;
    let update = session.complete(text);
    push(socket, &update).await
}

async fn push(socket: &mut WebSocket, message: &ServerMessage) -> anyhow::Result<()> {
    let text = serde_json::to_string(message)?;
    socket.send(Message::Text(text)).await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
