//! Session-opening handshake.
//!
//! The client sends [`Hello`] immediately after the stream opens; the
//! engine answers with [`HelloAck`]. A version mismatch is rejected
//! before any operation is accepted.

use serde::{Deserialize, Serialize};

/// Protocol version spoken by this crate.
pub const PROTOCOL_VERSION: u32 = 1;

/// First message on a new session, sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hello {
    /// Client identity, shown in the engine's client table.
    pub name: String,
    /// Shared-memory/session namespace prefix.
    pub prefix: String,
    /// Client protocol version.
    pub version: u32,
}

/// Engine's answer to [`Hello`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HelloAck {
    /// Session accepted.
    Ready {
        /// Engine protocol version.
        version: u32,
    },
    /// Session refused, with a reason.
    Rejected(String),
}
