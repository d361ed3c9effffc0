//! Acknowledgement building for processed command frames.
//!
//! Every inbound command gets exactly one reply frame.  What that frame
//! contains depends on the configured [`AckMode`]:
//!
//! - **Echo** replays the original command text unchanged — the reference
//!   protocol's contract, where a failed dispatch is indistinguishable from a
//!   successful one.
//! - **Status** replies with a JSON [`ServerAck`] carrying the dispatch
//!   outcome, for clients that want to know whether their keystrokes landed.

use tracing::error;

use crate::domain::config::AckMode;
use crate::domain::messages::ServerAck;

/// Builds the reply text for one processed command.
///
/// In status mode the JSON serialization of [`ServerAck`] cannot realistically
/// fail (string + bool fields only); should it ever, the error is logged and
/// the echo reply is used as a fallback so the client always gets its one
/// reply frame per request.
pub fn build_ack(command: &str, dispatched: bool, mode: AckMode) -> String {
    match mode {
        AckMode::Echo => command.to_string(),
        AckMode::Status => {
            let ack = ServerAck::Ack {
                command: command.to_string(),
                dispatched,
            };
            match serde_json::to_string(&ack) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to serialize ack for '{command}': {e}");
                    command.to_string()
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
