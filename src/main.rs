use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use roaster_core::{CoreConfig, RoastService, DEFAULT_REST_ADDR};

/// Main entry point for the todo roaster server
///
/// Starts the REST server on port 3000 (configurable via ROASTER_REST_ADDR), exposing
/// `POST /api/roast`, `GET /health` and the Swagger UI.
///
/// # Environment Variables
/// - `ROASTER_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `ANTHROPIC_API_KEY`: key for the text-generation provider (required)
/// - `ANTHROPIC_BASE_URL`: provider base URL (default: "https://api.anthropic.com")
/// - `ROASTER_MODEL`: model name (default: "claude-3-5-sonnet-20241022")
/// - `ROASTER_MAX_TOKENS`: generation bound per roast (default: 300)
/// - `ROASTER_CONCURRENCY`: provider calls in flight per batch (default: 1, sequential)
/// - `ROASTER_PROVIDER_TIMEOUT_SECS`: per-call timeout (default: none)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roaster_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("roaster_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("ROASTER_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::from_env()?;
    tracing::info!("++ Starting roaster REST on {}", rest_addr);
    tracing::info!(
        "++ Provider model {} (max_tokens {}, concurrency {})",
        cfg.model(),
        cfg.max_tokens(),
        cfg.concurrency()
    );

    let state = AppState {
        roast_service: RoastService::from_config(&cfg)?,
    };

    api_rest::serve(&rest_addr, state).await
}
