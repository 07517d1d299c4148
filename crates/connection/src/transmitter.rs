//! Per-chunk deadline-bounded send loop.

use std::io;
use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::time::timeout_at;
use tracing::trace;

use filebeam_transfer::ChunkReader;

use crate::{ConnectionError, TransferConfig};

/// Outcome of a completed push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSummary {
    pub bytes_sent: u64,
    pub chunks_sent: u64,
    pub elapsed: Duration,
}

/// Streams `reader` into `stream`, one chunk at a time, in read order.
///
/// Each chunk gets a fresh `config.send_timeout` budget covering its
/// readiness waits and however many partial writes it takes to hand the
/// whole chunk to the transport. Chunk *n+1* is not read until chunk *n*
/// has been fully accepted.
///
/// Both handles are consumed and dropped on every exit path, so the
/// socket and the source file are closed whether the transfer completes
/// or aborts.
pub async fn transmit(
    stream: TcpStream,
    mut reader: ChunkReader,
    config: &TransferConfig,
) -> Result<TransferSummary, ConnectionError> {
    let started = Instant::now();
    let mut bytes_sent: u64 = 0;
    let mut chunks_sent: u64 = 0;

    while let Some(chunk) = reader.next_chunk()? {
        let deadline = tokio::time::Instant::now() + config.send_timeout;
        let mut written = 0;

        while written < chunk.len() {
            let offset = chunk.offset + written as u64;

            match timeout_at(deadline, stream.writable()).await {
                Ok(Ok(())) => {}
                Ok(Err(source)) => {
                    return Err(ConnectionError::SendCheck { offset, source });
                }
                Err(_) => {
                    return Err(ConnectionError::SendTimeout {
                        offset,
                        timeout: config.send_timeout,
                    });
                }
            }

            match stream.try_write(&chunk.data[written..]) {
                Ok(0) => {
                    return Err(ConnectionError::Send {
                        offset,
                        source: io::ErrorKind::WriteZero.into(),
                    });
                }
                Ok(n) => written += n,
                // Readiness can be spurious; re-arm the wait on the same
                // chunk budget.
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                Err(source) => return Err(ConnectionError::Send { offset, source }),
            }
        }

        bytes_sent += chunk.len() as u64;
        chunks_sent += 1;
        trace!(offset = chunk.offset, len = chunk.len(), "chunk sent");
    }

    Ok(TransferSummary {
        bytes_sent,
        chunks_sent,
        elapsed: started.elapsed(),
    })
}
