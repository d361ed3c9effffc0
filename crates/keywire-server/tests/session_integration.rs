//! Integration tests for the per-connection command loop.
//!
//! # Purpose
//!
//! These tests exercise the session handler through its *public* API the same
//! way the accept loop uses it, over a real loopback WebSocket connection:
//!
//! - The happy path: a command frame produces the correct press/release
//!   sequence on the injector and exactly one acknowledgement frame.
//! - The echo contract: the reply is the inbound text unchanged, even when
//!   dispatch fails.
//! - The status upgrade: with `--ack-mode status` the reply is a JSON object
//!   carrying the dispatch outcome.
//! - Sequencing: multiple commands on one connection are processed strictly
//!   in arrival order.
//!
//! # Test setup
//!
//! Each test binds a listener on `127.0.0.1:0` (ephemeral port), spawns
//! `handle_connection` for the first accepted stream with a mock injector,
//! and connects a `tokio-tungstenite` client to the resulting address.  The
//! acknowledgement is the synchronisation point: once the client has read the
//! reply frame, dispatch for that command is guaranteed to have completed, so
//! the mock's call log can be asserted without sleeps.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{client_async, tungstenite::Message};

use keywire_core::{KeyToken, NamedKey};
use keywire_server::application::dispatch_chord::{DispatchChordUseCase, KeyInjector};
use keywire_server::domain::{AckMode, ServerConfig, ServerAck};
use keywire_server::infrastructure::injector::mock::{KeyCall, MockKeyInjector};
use keywire_server::infrastructure::ws_server::{handle_connection, SessionContext};

// ── Test harness ──────────────────────────────────────────────────────────────

/// Starts a one-shot session server on an ephemeral loopback port.
///
/// Returns the address to connect to and the shared mock injector whose call
/// log the test can assert on.
async fn start_session_server(
    ack_mode: AckMode,
    should_fail: bool,
) -> (SocketAddr, Arc<MockKeyInjector>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral listener");
    let addr = listener.local_addr().expect("listener address");

    let injector = Arc::new(MockKeyInjector {
        should_fail,
        ..MockKeyInjector::default()
    });

    let ctx = Arc::new(SessionContext {
        config: ServerConfig {
            bind_addr: addr,
            ack_mode,
        },
        dispatcher: DispatchChordUseCase::new(
            Arc::clone(&injector) as Arc<dyn KeyInjector>
        ),
    });

    tokio::spawn(async move {
        let (stream, peer_addr) = listener.accept().await.expect("accept");
        handle_connection(stream, peer_addr, ctx).await;
    });

    (addr, injector)
}

/// Connects a WebSocket client to the test server.
async fn connect(addr: SocketAddr) -> tokio_tungstenite::WebSocketStream<TcpStream> {
    let stream = TcpStream::connect(addr).await.expect("tcp connect");
    let (ws, _response) = client_async(format!("ws://{addr}"), stream)
        .await
        .expect("websocket handshake");
    ws
}

/// Sends one command and returns the text of the single reply frame.
async fn send_command(
    ws: &mut tokio_tungstenite::WebSocketStream<TcpStream>,
    command: &str,
) -> String {
    ws.send(Message::Text(command.to_string()))
        .await
        .expect("send command frame");
    match ws.next().await.expect("reply frame").expect("frame ok") {
        Message::Text(text) => text,
        other => panic!("expected text reply, got {other:?}"),
    }
}

// ── End-to-end command tests ──────────────────────────────────────────────────

/// Sending "space" must produce press(Space); release(Space) and echo "space".
#[tokio::test]
async fn test_space_command_end_to_end() {
    // Arrange
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    // Act
    let reply = send_command(&mut ws, "space").await;

    // Assert
    assert_eq!(reply, "space");
    let space = KeyToken::Named(NamedKey::Space);
    assert_eq!(
        injector.calls(),
        vec![KeyCall::Press(space), KeyCall::Release(space)]
    );
}

/// Sending "cmd+c" must hold Cmd around the tap of 'c' and echo "cmd+c".
#[tokio::test]
async fn test_cmd_c_command_end_to_end() {
    // Arrange
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    // Act
    let reply = send_command(&mut ws, "cmd+c").await;

    // Assert
    assert_eq!(reply, "cmd+c");
    let cmd = KeyToken::Named(NamedKey::Cmd);
    let c = KeyToken::Literal('c');
    assert_eq!(
        injector.calls(),
        vec![
            KeyCall::Press(cmd),
            KeyCall::Press(c),
            KeyCall::Release(c),
            KeyCall::Release(cmd),
        ]
    );
}

/// A three-token chord must be strictly nested: presses left to right, then
/// releases right to left.
#[tokio::test]
async fn test_ctrl_shift_a_nested_bracketing() {
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "ctrl+shift+a").await;

    assert_eq!(reply, "ctrl+shift+a");
    let ctrl = KeyToken::Named(NamedKey::Ctrl);
    let shift = KeyToken::Named(NamedKey::Shift);
    let a = KeyToken::Literal('a');
    assert_eq!(
        injector.calls(),
        vec![
            KeyCall::Press(ctrl),
            KeyCall::Press(shift),
            KeyCall::Press(a),
            KeyCall::Release(a),
            KeyCall::Release(shift),
            KeyCall::Release(ctrl),
        ]
    );
}

// ── Acknowledgement contract ──────────────────────────────────────────────────

/// The echo contract holds even for an unparseable command: the empty string
/// dispatches nothing but is still echoed back verbatim.
#[tokio::test]
async fn test_echo_happens_even_when_dispatch_fails() {
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "").await;

    assert_eq!(reply, "");
    assert!(injector.calls().is_empty());
}

/// The echo is the literal inbound text: resolution lowercases internally,
/// but the reply preserves the client's casing.
#[tokio::test]
async fn test_echo_preserves_original_casing() {
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "CMD+C").await;

    assert_eq!(reply, "CMD+C");
    // Dispatch still happened on the lowercased resolution.
    assert_eq!(injector.calls().len(), 4);
}

/// Echo mode hides injector failures: the reply is indistinguishable from a
/// successful dispatch.
#[tokio::test]
async fn test_echo_mode_hides_injection_failure() {
    let (addr, injector) = start_session_server(AckMode::Echo, true).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "space").await;

    assert_eq!(reply, "space");
    assert!(injector.calls().is_empty());
}

/// Status mode reports a successful dispatch as JSON.
#[tokio::test]
async fn test_status_mode_reports_success() {
    let (addr, _injector) = start_session_server(AckMode::Status, false).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "cmd+c").await;

    let ack: ServerAck = serde_json::from_str(&reply).expect("valid JSON ack");
    assert_eq!(
        ack,
        ServerAck::Ack {
            command: "cmd+c".to_string(),
            dispatched: true,
        }
    );
}

/// Status mode surfaces injector failures to the client.
#[tokio::test]
async fn test_status_mode_reports_injection_failure() {
    let (addr, _injector) = start_session_server(AckMode::Status, true).await;
    let mut ws = connect(addr).await;

    let reply = send_command(&mut ws, "space").await;

    let ack: ServerAck = serde_json::from_str(&reply).expect("valid JSON ack");
    assert_eq!(
        ack,
        ServerAck::Ack {
            command: "space".to_string(),
            dispatched: false,
        }
    );
}

// ── Sequencing ────────────────────────────────────────────────────────────────

/// Commands on one connection are processed strictly in arrival order: the
/// call log of the second command follows the first completely.
#[tokio::test]
async fn test_commands_are_processed_sequentially() {
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    assert_eq!(send_command(&mut ws, "a").await, "a");
    assert_eq!(send_command(&mut ws, "b").await, "b");

    let a = KeyToken::Literal('a');
    let b = KeyToken::Literal('b');
    assert_eq!(
        injector.calls(),
        vec![
            KeyCall::Press(a),
            KeyCall::Release(a),
            KeyCall::Press(b),
            KeyCall::Release(b),
        ]
    );
}

/// Closing the connection ends the session cleanly; commands sent before the
/// close are still fully dispatched.
#[tokio::test]
async fn test_session_close_after_commands() {
    let (addr, injector) = start_session_server(AckMode::Echo, false).await;
    let mut ws = connect(addr).await;

    send_command(&mut ws, "enter").await;
    ws.close(None).await.expect("close handshake");

    let enter = KeyToken::Named(NamedKey::Enter);
    assert_eq!(
        injector.calls(),
        vec![KeyCall::Press(enter), KeyCall::Release(enter)]
    );
}
