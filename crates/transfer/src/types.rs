/// A chunk of file data queued for sending.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Byte offset within the source file.
    pub offset: u64,
    /// Raw chunk data, at most one chunk size long and never empty.
    pub data: Vec<u8>,
}

impl Chunk {
    /// Length of this chunk in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a zero-byte read ends the stream instead of
    /// producing a chunk.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
