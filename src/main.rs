//! Sports arbitrage scanner entry point.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sports_arb::alert::{AlertSink, TelegramClient};
use sports_arb::api::{create_router, AppState};
use sports_arb::arbitrage::startup_banner;
use sports_arb::config::Config;
use sports_arb::metrics;
use sports_arb::odds::TheOddsApiClient;
use sports_arb::scanner::{poll_delay, scan_once, shutdown_signal};

/// Sports moneyline arbitrage scanner with Telegram alerts.
#[derive(Parser, Debug)]
#[command(name = "sports-arb")]
#[command(about = "Scans bookmaker odds for risk-free arbitrage and alerts via Telegram")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port for health/metrics.
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scan loop (default).
    Run {
        /// HTTP server port for health/metrics.
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Send a test message through the Telegram sink.
    TestAlert,

    /// List the sports The Odds API currently offers.
    Sports,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("sports_arb=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::TestAlert) => cmd_test_alert().await,
        Some(Command::Sports) => cmd_sports().await,
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SPORTS ARB - CONFIGURATION CHECK");
    println!("======================================================================");

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

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Sports: {}", config.sports.join(", "));
    println!("  Regions: {}", config.regions_param());
    println!("  Markets: {}", config.markets_param());
    println!("  Min Edge: {}%", config.min_edge_pct);
    println!("  Bankroll: ${}", config.bankroll);
    println!("  Poll Interval: {}s", config.poll_seconds);
    let whitelist = config.whitelist();
    if whitelist.is_empty() {
        println!("  Whitelist: ALL bookmakers");
    } else {
        let mut books: Vec<String> = whitelist.into_iter().collect();
        books.sort();
        println!("  Whitelist: {}", books.join(", "));
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Send a test message through the Telegram sink.
async fn cmd_test_alert() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let telegram = TelegramClient::new(&config);

    println!("Sending test alert...");
    telegram
        .send_text("✅ Test alert from sports-arb. Delivery works.")
        .await?;
    println!("Delivered.");

    Ok(())
}

/// List available sports from The Odds API.
async fn cmd_sports() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let client = TheOddsApiClient::new(&config);
    let sports = client.fetch_sports().await?;

    println!("{} sports available:", sports.len());
    for sport in sports {
        let marker = if sport.active { " " } else { "-" };
        println!("{} {:40} {} ({})", marker, sport.key, sport.title, sport.group);
    }

    Ok(())
}

/// Run the main scan loop.
async fn cmd_run(port: u16) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    info!("Sports: {}", config.sports.join(", "));
    info!("Min edge: {}% | Poll: {}s", config.min_edge_pct, config.poll_seconds);

    // Install the Prometheus recorder before any metric is touched.
    let prometheus = PrometheusBuilder::new().install_recorder()?;
    metrics::init_metrics();

    let app_state = AppState::new().with_prometheus(prometheus);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(app_state.clone());
    let _server_handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });

    let odds = TheOddsApiClient::new(&config);
    let telegram = TelegramClient::new(&config);

    // A failing sink at startup is treated like bad credentials: bail out
    // before entering the loop.
    telegram.send_text(&startup_banner(&config)).await?;

    info!("Starting arbitrage scanner...");

    // Immediate first scan so a fresh deployment reports promptly.
    let started = Instant::now();
    match scan_once(&odds, &telegram, &config).await {
        Ok(report) => {
            metrics::inc_scan_cycles();
            metrics::record_cycle_duration(started);
            app_state.stats.write().await.absorb(&report);
            app_state.set_ready(true);

            if report.alerts_sent == 0 {
                if let Err(e) = telegram
                    .send_text("ℹ️ No arbitrage found yet. Will keep checking.")
                    .await
                {
                    warn!("Failed to send first-scan notice: {}", e);
                }
            }
        }
        Err(e) => {
            error!("Initial scan failed: {}", e);
            if let Err(send_err) = telegram
                .send_text(&format!("❌ Initial scan failed: {}", e))
                .await
            {
                warn!("Failed to report initial scan error: {}", send_err);
            }
        }
    }

    // Poll loop: fixed cadence measured from cycle start.
    let interval = Duration::from_secs(config.poll_seconds);
    let mut delay = poll_delay(interval, started.elapsed());
    loop {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown_signal() => {
                info!("Interrupt received, shutting down");
                break;
            }
        }

        let started = Instant::now();
        match scan_once(&odds, &telegram, &config).await {
            Ok(report) => {
                metrics::inc_scan_cycles();
                metrics::record_cycle_duration(started);
                app_state.stats.write().await.absorb(&report);
                app_state.set_ready(true);

                if report.alerts_sent > 0 {
                    info!(alerts = report.alerts_sent, "Signals sent this cycle");
                    if let Err(e) = telegram
                        .send_text(&format!("📣 Signals sent: {}", report.alerts_sent))
                        .await
                    {
                        warn!("Failed to send cycle summary: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("Scan cycle failed: {}", e);
            }
        }

        delay = poll_delay(interval, started.elapsed());
    }

    info!("Scanner stopped");

    Ok(())
}
