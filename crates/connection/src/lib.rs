//! Deadline-bounded TCP push connection.
//!
//! Connecting and waiting for write-readiness are the only two places this
//! crate suspends, and both are raced against an explicit deadline — no
//! primitive is awaited without one. A timeout at any stage aborts the
//! whole run; there is no retry.

mod client;
mod config;
mod connector;
mod transmitter;

pub use client::push_file;
pub use config::{CONNECT_TIMEOUT, SEND_TIMEOUT, TransferConfig};
pub use connector::{Endpoint, connect};
pub use transmitter::{TransferSummary, transmit};

use std::net::SocketAddrV4;
use std::time::Duration;

use filebeam_transfer::TransferError;

/// Errors produced while pushing a file to a peer.
///
/// Every variant is terminal to the run. Partial progress is abandoned;
/// the socket and source handles are dropped on the way out.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// The local socket could not be created or configured.
    #[error("socket setup failed: {0}")]
    Setup(#[source] std::io::Error),

    /// The connection attempt was rejected or failed to hand-shake.
    #[error("connect to {addr} failed: {source}")]
    Connect {
        addr: SocketAddrV4,
        #[source]
        source: std::io::Error,
    },

    /// The peer neither accepted nor refused within the connect deadline.
    #[error("connect to {addr} timed out after {timeout:?}")]
    ConnectTimeout {
        addr: SocketAddrV4,
        timeout: Duration,
    },

    /// The write-readiness wait itself failed during a chunk send.
    #[error("write-readiness check failed at byte offset {offset}: {source}")]
    SendCheck {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// A chunk was not fully accepted by the transport within its deadline.
    #[error("send timed out after {timeout:?} at byte offset {offset}")]
    SendTimeout { offset: u64, timeout: Duration },

    /// A write on the ready socket failed (peer closed, reset, ...).
    ///
    /// Broken pipes land here as ordinary error values; the process never
    /// sees a `SIGPIPE`.
    #[error("send failed at byte offset {offset}: {source}")]
    Send {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// The byte source could not be opened or read.
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
}
