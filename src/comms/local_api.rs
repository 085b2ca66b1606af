use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Tera;
use tracing::{debug, error, info, warn};

use crate::tv::codes::CommandTable;
use crate::tv::config::Config;
use crate::tv::ircc::IrccClient;

type SharedState = Arc<AppState>;

const REMOTE_TEMPLATE: &str = include_str!("../../templates/remote.html");

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ircc: IrccClient,
    pub templates: Option<Arc<Tera>>,
    pub with_ui: bool,
}

impl AppState {
    pub fn new(config: Arc<Config>, with_ui: bool) -> Self {
        let templates = if with_ui {
            let mut tera = Tera::default();
            match tera.add_raw_template("remote.html", REMOTE_TEMPLATE) {
                Ok(()) => {
                    debug!("Loaded {} templates", tera.get_template_names().count());
                    Some(Arc::new(tera))
                }
                Err(e) => {
                    error!("Template parsing error: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            ircc: IrccClient::new(config.device.clone()),
            config,
            templates,
            with_ui,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct CommandEntry {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Serialize)]
pub struct PressResponse {
    pub command: String,
    pub status: String,
}

/// One button on the page. An empty `command` renders a blank spacer.
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: String,
    pub command: String,
}

impl Button {
    fn new(label: &str, command: &str) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
        }
    }

    fn spacer() -> Self {
        Self::new("", "")
    }
}

/// Number pad in phone order: 1-9, then a blank cell and 0.
pub fn numpad() -> Vec<Button> {
    let mut buttons = Vec::with_capacity(11);
    for i in 0..10 {
        let num = (i + 1) % 10;
        if num == 0 {
            buttons.push(Button::spacer());
        }
        buttons.push(Button::new(&num.to_string(), &format!("Num{num}")));
    }
    buttons
}

fn navigation() -> Vec<Button> {
    vec![
        Button::new("Home", "Home"),
        Button::new("▲", "Up"),
        Button::new("Back", "Return"),
        Button::new("◀", "Left"),
        Button::new("OK", "Confirm"),
        Button::new("▶", "Right"),
        Button::spacer(),
        Button::new("▼", "Down"),
        Button::spacer(),
    ]
}

fn inputs() -> Vec<Button> {
    vec![
        Button::new("Input", "Input"),
        Button::new("HDMI 1", "Hdmi1"),
        Button::new("HDMI 2", "Hdmi2"),
        Button::new("HDMI 3", "Hdmi3"),
        Button::new("HDMI 4", "Hdmi4"),
    ]
}

fn command_list() -> Vec<CommandEntry> {
    CommandTable::global()
        .iter()
        .map(|(name, code)| CommandEntry { name, code })
        .collect()
}

// Health check
async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

// Remote page, or a JSON summary in API-only mode
async fn home(State(state): State<SharedState>) -> impl IntoResponse {
    if !state.with_ui {
        return Json(json!({
            "device": {
                "address": state.config.device.address,
                "configured": state.config.device.is_configured(),
            },
            "commands": CommandTable::global().len(),
            "version": crate::VERSION,
        }))
        .into_response();
    }

    let Some(templates) = &state.templates else {
        return Html("<html><body>Templates not loaded</body></html>".to_string()).into_response();
    };

    let mut context = tera::Context::new();
    context.insert("numpad", &numpad());
    context.insert("navigation", &navigation());
    context.insert("inputs", &inputs());
    context.insert("configured", &state.config.device.is_configured());
    context.insert("address", &state.config.device.address);
    context.insert("version", crate::VERSION);

    match templates.render("remote.html", &context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<html><body>Error rendering template</body></html>".to_string()),
            )
                .into_response()
        }
    }
}

async fn list_commands() -> impl IntoResponse {
    Json(command_list())
}

// Look up a button name and forward its code to the TV
async fn press_command(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.ircc.press(&name).await {
        None => {
            warn!(command = %name, "unknown command requested");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("unknown command: {name}"),
                }),
            )
                .into_response()
        }
        Some(Ok(())) => {
            info!(command = %name, "command sent");
            Json(PressResponse {
                command: name,
                status: "ok".to_string(),
            })
            .into_response()
        }
        Some(Err(e)) => (
            e.status_code(),
            Json(ErrorResponse {
                error: e.client_message(),
            }),
        )
            .into_response(),
    }
}

pub fn create_router(state: SharedState) -> Router {
    let mut router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/commands", get(list_commands))
        .route("/api/commands/{name}", post(press_command));

    // Add static file serving when UI is enabled
    if state.with_ui {
        use tower_http::services::ServeDir;
        router = router.nest_service("/static", ServeDir::new(&state.config.static_dir));
    }

    router.with_state(state)
}

pub async fn serve(config: Config, port: u16, with_ui: bool) -> Result<()> {
    if !config.device.is_configured() {
        warn!("no TV address or pre-shared key configured; button presses will fail");
    }

    let cfg = Arc::new(config);
    let state = Arc::new(AppState::new(cfg, with_ui));
    let app = create_router(state);

    if with_ui {
        info!("HTTP server with UI starting on port {}", port);
    } else {
        info!("HTTP server in API-only mode starting on port {}", port);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).into_future().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numpad_puts_zero_after_a_spacer() {
        let pad = numpad();
        let labels: Vec<_> = pad.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "", "0"]);
        assert_eq!(pad[10].command, "Num0");
        assert!(pad[9].command.is_empty());
    }

    #[test]
    fn page_buttons_reference_known_commands() {
        let table = CommandTable::global();
        for button in numpad().iter().chain(navigation().iter()).chain(inputs().iter()) {
            if !button.command.is_empty() {
                assert!(
                    table.lookup(&button.command).is_some(),
                    "{} is not in the command table",
                    button.command
                );
            }
        }
    }

    #[test]
    fn remote_template_renders() {
        let state = AppState::new(Arc::new(Config::default()), true);
        let tera = state.templates.expect("template should parse");

        let mut context = tera::Context::new();
        context.insert("numpad", &numpad());
        context.insert("navigation", &navigation());
        context.insert("inputs", &inputs());
        context.insert("configured", &false);
        context.insert("address", "");
        context.insert("version", "test");

        let html = tera.render("remote.html", &context);
        assert!(html.is_ok(), "template error: {:?}", html.err());
        let html = html.unwrap();
        assert!(html.contains(r#"data-cmd="TvPower""#));
        assert!(html.contains(r#"data-cmd="Num0""#));
    }
}
