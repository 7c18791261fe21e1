use std::{
    env,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook::{
    API_KEY_ENV, AppState, DEFAULT_MODEL, GEMINI_BASE_URL, GeminiModel, LanguageModel,
    build_router, graceful_shutdown,
};

/// The AI assistant server for pocketbook.
///
/// The API key for the language model is read from the environment variable
/// GEMINI_API_KEY.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The language model to forward requests to.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// The base URL of the language model API.
    #[arg(long, default_value = GEMINI_BASE_URL)]
    api_base_url: String,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::new(args.address, args.port);

    let model: Option<Arc<dyn LanguageModel>> = match env::var(API_KEY_ENV) {
        Ok(api_key) if !api_key.trim().is_empty() => Some(Arc::new(GeminiModel::new(
            reqwest::Client::new(),
            api_key.trim(),
            &args.model,
            &args.api_base_url,
        ))),
        _ => {
            tracing::warn!(
                "The environment variable '{API_KEY_ENV}' is not set, \
                every assistant request will fail until it is."
            );
            None
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(AppState::new(model)));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the server.");
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
