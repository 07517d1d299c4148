//! Fixed-size chunked reading of a local file for one-way transfer.

mod chunked;
mod types;

pub use chunked::ChunkReader;
pub use types::Chunk;

/// Default chunk size: 1 KiB.
///
/// Chunk boundaries are invisible on the wire; a chunk is the unit that
/// gets its own send deadline.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
