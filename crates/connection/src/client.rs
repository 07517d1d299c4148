//! One-call orchestration: connect, then stream the file.

use std::path::Path;

use tracing::info;

use filebeam_transfer::ChunkReader;

use crate::{ConnectionError, Endpoint, TransferConfig, TransferSummary, connect, transmit};

/// Pushes the contents of `path` to `endpoint`.
///
/// The source is opened first so a missing file costs no connection. The
/// connect phase then runs to completion before any byte is sent; the two
/// phases never interleave. Raw file bytes go out in order with no
/// framing — the peer reads until the connection closes.
pub async fn push_file(
    endpoint: Endpoint,
    path: &Path,
    config: &TransferConfig,
) -> Result<TransferSummary, ConnectionError> {
    let reader = ChunkReader::new(path, config.chunk_size)?;
    let stream = connect(endpoint, config).await?;
    info!(
        peer = %endpoint,
        file = %path.display(),
        size = reader.file_size(),
        "connected, starting transfer"
    );

    let summary = transmit(stream, reader, config).await?;
    info!(
        bytes = summary.bytes_sent,
        chunks = summary.chunks_sent,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "transfer complete"
    );
    Ok(summary)
}
