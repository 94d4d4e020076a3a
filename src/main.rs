//! status-relay entry point.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::routing::get;
use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use status_relay::api::{create_router, AppState};
use status_relay::config::Config;
use status_relay::lookup::{HttpLookupClient, QueryKind, StatusLookup};
use status_relay::metrics;
use status_relay::notify::{DiscordWebhook, NotifySink};
use status_relay::utils::shutdown_signal;

/// Minecraft status and WHOIS lookups relayed to a Discord webhook.
#[derive(Parser, Debug)]
#[command(name = "status-relay")]
#[command(about = "Relays Minecraft server status and WHOIS lookups to a Discord webhook")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP listen port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the relay server (default).
    Run {
        /// HTTP listen port (overrides PORT from the environment).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Run a single lookup and print the result without dispatching.
    Probe {
        /// Lookup kind: "minecraft" (alias "mc") or "whois".
        kind: String,

        /// Server address or domain to look up.
        target: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("status_relay=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Probe { kind, target }) => cmd_probe(&kind, &target).await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("STATUS RELAY - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary; the webhook URL itself stays out of the
    // output since it embeds a secret token.
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Webhook URL: configured");
    println!("  Port: {}", config.port);
    println!("  Minecraft status API: {}", config.mcstatus_api_url);
    println!("  WHOIS API: {}", config.whois_api_url);
    println!("  Upstream timeout: {}ms", config.http_timeout_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run a single lookup and print the result.
async fn cmd_probe(kind: &str, target: &str) -> anyhow::Result<()> {
    let kind = QueryKind::from_str(kind)
        .map_err(|_| anyhow::anyhow!("Unknown lookup kind: {} (expected minecraft or whois)", kind))?;

    let config = Config::load()?;
    let client = HttpLookupClient::new(&config);

    println!("======================================================================");
    println!("STATUS RELAY - {} PROBE", kind.to_string().to_uppercase());
    println!("======================================================================");
    println!("Target: {}", target);
    println!();

    match kind {
        QueryKind::Minecraft => match client.mc_status(target).await {
            Ok(status) => {
                println!("SERVER ONLINE");
                println!("----------------------------------------------------------------------");
                println!("  IP: {}", status.ip.as_deref().unwrap_or("-"));
                println!(
                    "  Port: {}",
                    status.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
                );
                println!("  Version: {}", status.version.as_deref().unwrap_or("-"));
                if let Some(players) = &status.players {
                    println!(
                        "  Players: {} / {}",
                        players.online.unwrap_or(0),
                        players.max.unwrap_or(0)
                    );
                }
                if let Some(clean) = status.motd.as_ref().and_then(|m| m.clean.as_ref()) {
                    for line in clean {
                        println!("  MOTD: {}", line);
                    }
                }
            }
            Err(e) => {
                println!("LOOKUP FAILED");
                println!("  Error: {}", e);
            }
        },
        QueryKind::Whois => match client.whois(target).await {
            Ok(record) => {
                println!("RECORD FOUND");
                println!("----------------------------------------------------------------------");
                println!("  Domain: {}", record.domain.as_deref().unwrap_or("-"));
                println!("  Registrant: {}", record.registrant.as_deref().unwrap_or("-"));
                println!("  Registered: {}", record.registered.as_deref().unwrap_or("-"));
                println!("  Expires: {}", record.expires.as_deref().unwrap_or("-"));
                for ns in record.nameservers.unwrap_or_default() {
                    println!("  Nameserver: {}", ns);
                }
            }
            Err(e) => {
                println!("LOOKUP FAILED");
                println!("  Error: {}", e);
            }
        },
    }

    println!("======================================================================");

    Ok(())
}

/// Run the relay server.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    // Validate configuration; a missing webhook URL fails here, before the
    // server ever accepts a request.
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Minecraft status API: {}", config.mcstatus_api_url);
    info!("WHOIS API: {}", config.whois_api_url);
    info!("Upstream timeout: {}ms", config.http_timeout_ms);

    // Initialize metrics
    let prometheus = PrometheusBuilder::new().install_recorder()?;
    metrics::init_metrics();

    // Create app state
    let config = Arc::new(config);
    let lookup: Arc<dyn StatusLookup> = Arc::new(HttpLookupClient::new(&config));
    let sink: Arc<dyn NotifySink> = Arc::new(DiscordWebhook::new(&config));
    let state = AppState::new(config.clone(), lookup, sink);

    let router = create_router(state).route(
        "/metrics",
        get(move || {
            let prometheus = prometheus.clone();
            async move { prometheus.render() }
        }),
    );

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
