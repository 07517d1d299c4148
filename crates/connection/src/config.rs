use std::time::Duration;

use filebeam_transfer::DEFAULT_CHUNK_SIZE;

/// Time allowed for the TCP handshake to complete.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Time allowed to hand one chunk to the transport.
///
/// The budget resets for every chunk, so a long transfer that keeps
/// moving never trips it — only a chunk that stalls does.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Timing and sizing knobs for one push run.
///
/// The defaults are the wire contract. Tests shrink the deadlines to keep
/// timeout scenarios fast; the CLI always runs with the defaults.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Deadline for the connection attempt.
    pub connect_timeout: Duration,
    /// Per-chunk deadline covering readiness waits and partial writes.
    pub send_timeout: Duration,
    /// Bytes read from the source per chunk.
    pub chunk_size: usize,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            send_timeout: SEND_TIMEOUT,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
