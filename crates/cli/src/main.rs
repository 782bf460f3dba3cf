use std::{net::SocketAddr, sync::Arc};

use {
    clap::Parser,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    parrot_gateway::server::{AppState, serve},
    parrot_inference::{HttpInferenceClient, InferenceConfig},
};

#[derive(Parser)]
#[command(name = "parrot", about = "parrot — stateless chat relay gateway")]
struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Inference endpoint base address (overrides PARROT_INFERENCE_URL).
    #[arg(long, env = "PARROT_INFERENCE_URL")]
    inference_url: Option<String>,

    /// Model selector passed through to logs (overrides PARROT_MODEL_ID).
    #[arg(long, env = "PARROT_MODEL_ID")]
    model_id: Option<String>,
}

/// Initialise tracing with an env-filter; `RUST_LOG` wins over `--log-level`.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    let mut config = InferenceConfig::from_env();
    if let Some(url) = &cli.inference_url {
        config.endpoint = url.clone();
    }
    if let Some(model) = &cli.model_id {
        config.model_id = model.clone();
    }

    let state = AppState {
        generator: Arc::new(HttpInferenceClient::new(&config)),
    };

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    info!(%addr, endpoint = %config.endpoint, "starting parrot");
    serve(addr, state).await?;
    Ok(())
}
