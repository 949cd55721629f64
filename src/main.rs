use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use picto_lingua::api;
use picto_lingua::config::Config;

#[derive(Parser)]
#[command(name = "picto-lingua")]
#[command(about = "Picture-driven vocabulary learning backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for HTTP API (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "picto_lingua=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = api::AppState::from_config(&config);
    let app = api::create_router(state, &config.cors_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("picto-lingua listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    match cli.command {
        Some(Commands::Serve { port: Some(port) }) => serve(config.with_port(port)).await,
        Some(Commands::Serve { port: None }) | None => serve(config).await,
    }
}
