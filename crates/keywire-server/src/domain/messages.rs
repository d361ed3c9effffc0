//! Acknowledgement message types for the structured (status) ack mode.
//!
//! In the default echo mode the server replies with the raw command text and
//! no message type is involved.  In status mode the reply is a JSON object,
//! and this module defines its shape.  The `#[serde(tag = "type")]` attribute
//! embeds the variant name as a `"type"` field so clients can switch on it
//! without guessing from the payload shape.

use serde::{Deserialize, Serialize};

/// A server-to-client acknowledgement frame (status mode only).
///
/// Wire shape:
///
/// ```json
/// {"type":"ack","command":"cmd+c","dispatched":true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerAck {
    /// One command frame was received, resolved, and dispatched.
    Ack {
        /// The original command text, unchanged.
        command: String,
        /// Whether the full press/release sequence completed successfully.
        /// `false` covers both an empty/unparseable command and a platform
        /// injection failure; a `false` result means the physical key state
        /// is indeterminate.
        dispatched: bool,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
