//! Podscript Gateway — serves the podcast generator form and renders generated scripts.
//! One outbound call per submit; HTML fragments are swapped into the page by htmx.

use axum::{
    body::Body,
    extract::{ConnectInfo, Form, Query, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use podscript_core::{
    render_commentator_fields, render_commentator_options, render_error, render_error_slot,
    render_script, CommentatorList, GenerationClient, GeneratorConfig, Markup, PodcastForm,
    PodcastGenerator, SectionedScript, DEFAULT_LENGTH_MINUTES, DEFAULT_TITLE,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct AppState {
    config: GeneratorConfig,
    generator: PodcastGenerator,
}

impl AppState {
    fn new(config: GeneratorConfig) -> Self {
        let generator = PodcastGenerator::new(GenerationClient::new(config.generation_url.clone()));
        Self { config, generator }
    }
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        tracing::debug!("[GATEWAY] .env not loaded: {} (using system environment)", e);
    }

    let config = match GeneratorConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("[GATEWAY] Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    tracing::info!(
        "[GATEWAY] {} v{} on {} -> generation service {}",
        config.app_name,
        podscript_core::version(),
        addr,
        config.generation_url
    );

    let app = router(Arc::new(AppState::new(config)));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("[GATEWAY] Cannot bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!("[GATEWAY] Server stopped: {}", e);
    }
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(serve_generator_ui))
        .route("/commentators", get(commentators_handler))
        .route("/generate", post(generate_handler))
        .route("/api/v1/generate", post(api_generate_handler))
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
}

async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    tracing::info!(
        "[GATEWAY] {} {} from {}",
        request.method(),
        request.uri().path(),
        peer
    );
    next.run(request).await
}

async fn health() -> &'static str {
    "OK"
}

/// Generator form with default title, length and commentators filled in.
async fn serve_generator_ui(State(state): State<Arc<AppState>>) -> Html<String> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    let commentators = CommentatorList::defaults();
    let page = INDEX
        .replace("{{APP_NAME}}", Markup::escape(&state.config.app_name).as_str())
        .replace("{{DEFAULT_TITLE}}", Markup::escape(DEFAULT_TITLE).as_str())
        .replace("{{DEFAULT_LENGTH}}", &DEFAULT_LENGTH_MINUTES.to_string())
        .replace(
            "{{COMMENTATOR_OPTIONS}}",
            render_commentator_options(commentators.len()).as_str(),
        )
        .replace(
            "{{COMMENTATOR_FIELDS}}",
            render_commentator_fields(&commentators).as_str(),
        );
    Html(page)
}

/// GET /commentators: name fields resized to the selected count, typed names kept.
async fn commentators_handler(Query(form): Query<PodcastForm>) -> Html<String> {
    Html(render_commentator_fields(&form.commentators()).into_string())
}

/// POST /generate. The body targets `#result`; the `#error` slot is updated out of band.
/// Success replaces the script and clears the error. A generation failure clears the script and
/// shows the message. A validation failure is retargeted to `#error` and leaves `#result` alone.
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PodcastForm>,
) -> Response {
    match state.generator.generate(&form).await {
        Ok(script) => Html(format!(
            "{}{}",
            render_script(&script),
            render_error_slot(None)
        ))
        .into_response(),
        Err(e) if e.is_validation() => {
            tracing::info!("[GATEWAY] Rejected submission: {}", e);
            (
                [("HX-Retarget", "#error"), ("HX-Reswap", "innerHTML")],
                Html(render_error(&e.user_message()).into_string()),
            )
                .into_response()
        }
        Err(e) => Html(render_error_slot(Some(&e.user_message())).into_string()).into_response(),
    }
}

/// POST /api/v1/generate: sectioned script as JSON.
async fn api_generate_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PodcastForm>,
) -> Result<Json<SectionedScript>, (StatusCode, Json<serde_json::Value>)> {
    state.generator.generate(&form).await.map(Json).map_err(|e| {
        let status = if e.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };
        (status, Json(serde_json::json!({ "error": e.user_message() })))
    })
}
