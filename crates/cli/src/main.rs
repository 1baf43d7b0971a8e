use clap::Parser;
use tabledns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "tabledns")]
#[command(version = "0.1.0")]
#[command(about = "tabledns - answers A queries from a JSON name table")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Name table file
    #[arg(long, value_name = "FILE")]
    names: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        names_path: cli.names.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting tabledns v{}", env!("CARGO_PKG_VERSION"));

    // Dependency Injection - Build all dependencies
    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos);

    bootstrap::preflight_name_table(&repos).await;

    // Bind before spawning so a port clash fails startup
    let dns_addr = config.server.dns_addr()?;
    let listener = server::bind_dns_listener(dns_addr, use_cases.resolve.clone(), &config)?;

    tokio::spawn(async move {
        listener.run().await;
        error!("DNS listener stopped");
    });

    // Start web server (blocking)
    let web_addr = config.server.web_addr()?;
    server::start_web_server(web_addr, use_cases.app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
