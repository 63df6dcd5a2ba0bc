use std::net::SocketAddr;
use std::time::Duration;

use blogsmith::{AppState, Settings, app, init_logging};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,
    /// Chat model used for generation
    #[arg(long, env = "BLOGSMITH_MODEL", default_value = "gpt-3.5-turbo")]
    model: String,
    /// Override the completion endpoint base URL
    #[arg(long, env = "OPENAI_API_BASE")]
    api_base: Option<String>,
    /// Upper bound in seconds for one completion call
    #[arg(long, default_value_t = 120)]
    request_timeout: u64,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    let settings = Settings {
        api_key: cli.api_key,
        model: cli.model,
        api_base: cli.api_base,
        request_timeout: Duration::from_secs(cli.request_timeout),
    };
    let state = AppState::new(&settings);

    let addr: SocketAddr = cli.addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Listening on http://{addr}");
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
