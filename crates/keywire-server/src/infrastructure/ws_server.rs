//! WebSocket server: accept loop and per-session command processing.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming TCP connections and upgrading them to WebSocket.
//! 3. Running one strictly sequential command loop per connection:
//!    read a text frame → resolve → dispatch → send the acknowledgement,
//!    and only then read the next frame.  There is no pipelining within a
//!    connection, so a slow dispatch stalls only its own session.
//! 4. Gracefully shutting down when the `running` flag is cleared.
//!
//! # Concurrency model
//!
//! Each connection runs in its own Tokio task, so many clients can be served
//! at once.  The OS keyboard is still a single shared device: ordering across
//! connections is guaranteed by the dispatch guard inside
//! [`DispatchChordUseCase`], which serialises whole chords, never individual
//! key events.
//!
//! The accept loop never blocks indefinitely: it polls `accept()` with a
//! 200 ms timeout so it can notice the shutdown flag even when no clients
//! are connecting.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use keywire_core::resolve;

use crate::application::acknowledge::build_ack;
use crate::application::dispatch_chord::DispatchChordUseCase;
use crate::domain::config::ServerConfig;
use crate::infrastructure::local_ip;

// ── Shared session state ──────────────────────────────────────────────────────

/// Everything a connection task needs: the configuration and the dispatcher.
///
/// Wrapped in a single `Arc` so the accept loop hands one cheap clone to each
/// spawned session task.
pub struct SessionContext {
    pub config: ServerConfig,
    pub dispatcher: DispatchChordUseCase,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs the main WebSocket accept loop until `running` is set to `false`.
///
/// Binds a TCP listener on `config.bind_addr`, logs the bound address (plus
/// the detected LAN address, when available, so users know what to point
/// their client at), and accepts connections in a loop.  Each accepted
/// connection is handed off to a dedicated Tokio task so one slow client
/// never blocks others.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port is
/// already in use or the process lacks permission to bind).
pub async fn run_server(
    config: ServerConfig,
    dispatcher: DispatchChordUseCase,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind listener on {}", config.bind_addr))?;

    info!("keywire listening on {}", config.bind_addr);
    if let Some(ip) = local_ip::detect() {
        info!(
            "reachable on the local network at ws://{}:{}",
            ip,
            config.bind_addr.port()
        );
    }

    let ctx = Arc::new(SessionContext { config, dispatcher });

    loop {
        // Check the shutdown flag before each accept attempt.
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // Short timeout on accept() so the loop can periodically check the
        // `running` flag even when no clients are connecting.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("new connection from {peer_addr}");
                let ctx = Arc::clone(&ctx);
                tokio::spawn(async move {
                    handle_connection(stream, peer_addr, ctx).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g., too many open file
                // descriptors).  Log it and keep serving.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout — no new connection in the last 200 ms.
            }
        }
    }

    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

/// Top-level handler for a single client connection.
///
/// Wraps [`run_session`] and logs the outcome.  This function is the entry
/// point for each per-connection Tokio task spawned by [`run_server`]; it is
/// public so integration tests can drive a session against a listener they
/// bound themselves.
pub async fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, ctx: Arc<SessionContext>) {
    // Short random ID so log lines from concurrent sessions are tellable apart
    // even when two clients share an address behind NAT.
    let session_id = Uuid::new_v4();
    match run_session(stream, peer_addr, session_id, ctx).await {
        Ok(()) => info!("session {session_id} ({peer_addr}) closed normally"),
        Err(e) => warn!("session {session_id} ({peer_addr}) closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of a single client session.
///
/// Completes the WebSocket handshake, then processes inbound frames strictly
/// one at a time until the channel closes.  Channel closure or errors end
/// only this session; other connections are unaffected.
///
/// # Errors
///
/// Returns an error if the WebSocket handshake fails or a reply frame cannot
/// be written.
async fn run_session(
    stream: TcpStream,
    peer_addr: SocketAddr,
    session_id: Uuid,
    ctx: Arc<SessionContext>,
) -> anyhow::Result<()> {
    // `accept_async` reads the client's HTTP Upgrade request and sends the
    // "101 Switching Protocols" response; after this the stream speaks
    // WebSocket frames.
    let mut ws_stream = accept_async(stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    info!("session {session_id}: WebSocket established with {peer_addr}");

    // Read and reply on the same task: dispatch is synchronous with respect
    // to message receipt, so the next frame is not read until the previous
    // command's dispatch completed and was acknowledged.
    while let Some(frame) = ws_stream.next().await {
        let msg = match frame {
            Ok(msg) => msg,
            Err(WsError::ConnectionClosed | WsError::Protocol(_)) => {
                debug!("session {session_id}: connection closed");
                break;
            }
            Err(e) => {
                warn!("session {session_id}: WebSocket error: {e}");
                break;
            }
        };

        match msg {
            WsMessage::Text(command) => {
                let chord = resolve(&command);
                let dispatched = ctx.dispatcher.dispatch(&chord);

                if dispatched {
                    debug!(
                        "session {session_id}: dispatched '{command}' ({} tokens)",
                        chord.len()
                    );
                } else {
                    warn!("session {session_id}: dispatch failed for '{command}'");
                }

                let ack = build_ack(&command, dispatched, ctx.config.ack_mode);
                ws_stream
                    .send(WsMessage::Text(ack))
                    .await
                    .with_context(|| format!("session {session_id}: failed to send ack"))?;
            }

            WsMessage::Binary(data) => {
                // The protocol is text-only.  Binary frames are unexpected;
                // log and skip without killing the session.
                warn!(
                    "session {session_id}: unexpected binary frame ({} bytes, ignored)",
                    data.len()
                );
            }

            WsMessage::Ping(data) => {
                // tungstenite queues the Pong reply automatically; just log.
                debug!("session {session_id}: ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {session_id}: pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {session_id}: Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {session_id}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}
