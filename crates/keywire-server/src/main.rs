//! keywire-server — entry point.
//!
//! This binary accepts WebSocket connections and replays textual
//! key-combination commands (`"cmd+c"`, `"ctrl+shift+a"`, `"space"`) as
//! synthetic keyboard input on the host machine.
//!
//! # Usage
//!
//! ```text
//! keywire-server [OPTIONS]
//!
//! Options:
//!   --port     <PORT>   WebSocket listener port [default: 8765]
//!   --bind     <ADDR>   Bind address [default: 0.0.0.0]
//!   --ack-mode <MODE>   Acknowledgement mode: echo | status [default: echo]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable           | Default   | Description                       |
//! |--------------------|-----------|-----------------------------------|
//! | `KEYWIRE_PORT`     | `8765`    | WebSocket listener port           |
//! | `KEYWIRE_BIND`     | `0.0.0.0` | Bind address                      |
//! | `KEYWIRE_ACK_MODE` | `echo`    | Acknowledgement mode              |
//!
//! # Architecture overview
//!
//! ```text
//! Client  (text frames over WebSocket)
//!       ↕
//! keywire-server  ← this process
//!   domain/         ServerConfig, AckMode, ack messages
//!   application/    chord dispatch + acknowledgement building
//!   infrastructure/
//!     ws_server/    accept loop, per-session command loop
//!     injector/     OS key injection (enigo)
//!       ↕
//! Host OS keyboard
//! ```
//!
//! # Security note
//!
//! The protocol carries no authentication or encryption: anyone who can reach
//! the port can inject keystrokes.  Bind to `127.0.0.1` or run on a trusted
//! network only.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keywire_server::application::dispatch_chord::DispatchChordUseCase;
use keywire_server::domain::{AckMode, ServerConfig};
use keywire_server::infrastructure::injector::DesktopKeyInjector;
use keywire_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// keywire remote-keyboard server.
///
/// Accepts WebSocket connections and replays textual key-combination commands
/// as synthetic keyboard input on the host machine.
#[derive(Debug, Parser)]
#[command(
    name = "keywire-server",
    about = "WebSocket server that replays key-combination commands as synthetic keyboard input",
    version
)]
struct Cli {
    /// TCP port for the WebSocket server to listen on.
    #[arg(long, default_value_t = 8765, env = "KEYWIRE_PORT")]
    port: u16,

    /// IP address to bind the WebSocket server to.
    ///
    /// Use `0.0.0.0` to accept connections from any network interface (LAN +
    /// localhost), or `127.0.0.1` to accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "KEYWIRE_BIND")]
    bind: String,

    /// Acknowledgement mode: `echo` replies with the original command text
    /// unchanged; `status` replies with a JSON object carrying the dispatch
    /// outcome.
    #[arg(long, default_value = "echo", env = "KEYWIRE_ACK_MODE")]
    ack_mode: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address or `--ack-mode`
    /// is not a recognised mode.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        let ack_mode: AckMode = self
            .ack_mode
            .parse()
            .with_context(|| format!("invalid --ack-mode '{}'", self.ack_mode))?;

        Ok(ServerConfig {
            bind_addr,
            ack_mode,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log level is controlled by RUST_LOG (e.g. RUST_LOG=debug); default info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!("keywire starting — bind={}", config.bind_addr);

    // Connect to the platform input facility up front so a missing desktop
    // session fails fast with a clear message instead of failing every
    // dispatch later.
    let injector = DesktopKeyInjector::new()
        .map(Arc::new)
        .context("failed to initialise the platform input facility")?;
    let dispatcher = DispatchChordUseCase::new(injector);

    // Graceful shutdown: Ctrl+C flips the shared flag; the accept loop polls
    // it every 200 ms and exits cleanly.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, dispatcher, running).await?;

    info!("keywire stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
