//! Structure-aware chunking
//!
//! This module turns a source file into retrievable chunks. Files with a
//! registered tree-sitter grammar are chunked along AST boundaries
//! (classes, functions, methods, interfaces); known text formats are
//! chunked by paragraph; anything else yields no chunks. Code files the
//! extractor produces nothing for degrade to paragraph chunking rather
//! than being dropped.

pub mod extract;
pub mod language;
pub mod parser;
pub mod text;
pub mod types;

pub use extract::semantic_nodes;
pub use language::{Detected, Language, CODE_EXTENSIONS, TEXT_EXTENSIONS};
pub use text::{chunk_text, DEFAULT_MAX_CHUNK_SIZE};
pub use types::{Chunk, ChunkKind};

use crate::provenance::Provenance;
use tracing::debug;

const MIN_CHUNK_SIZE: usize = 1;

/// Main chunker dispatching on file classification
pub struct Chunker {
    max_chunk_size: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker {
    pub fn new() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }

    pub fn with_max_chunk_size(self, max: usize) -> Self {
        let max = if max < MIN_CHUNK_SIZE {
            MIN_CHUNK_SIZE
        } else {
            max
        };
        Self {
            max_chunk_size: max,
        }
    }

    /// Chunk file content based on its path classification.
    ///
    /// Provenance, when supplied, is stamped onto every emitted chunk.
    /// Unsupported files yield an empty list; that is not an error.
    pub fn chunk_file(
        &self,
        content: &str,
        file_path: &str,
        provenance: Option<&Provenance>,
    ) -> Vec<Chunk> {
        let language = match Detected::from_path(file_path) {
            Detected::Unsupported => {
                debug!(path = file_path, "unsupported extension, skipping");
                return Vec::new();
            }
            Detected::Text => {
                return text::chunk_text(content, file_path, provenance, self.max_chunk_size);
            }
            Detected::Code(language) => language,
        };

        match extract::extract(content, file_path, language) {
            Ok(mut chunks) if !chunks.is_empty() => {
                for chunk in &mut chunks {
                    chunk.provenance = provenance.cloned();
                }
                chunks
            }
            Ok(_) => {
                debug!(
                    path = file_path,
                    language = language.as_str(),
                    "no structural chunks, falling back to paragraph chunking"
                );
                text::chunk_text(content, file_path, provenance, self.max_chunk_size)
            }
            Err(e) => {
                debug!(
                    error = %e,
                    path = file_path,
                    language = language.as_str(),
                    "AST parse failed, falling back to paragraph chunking"
                );
                text::chunk_text(content, file_path, provenance, self.max_chunk_size)
            }
        }
    }
}

/// Convenience function using the default chunk size
pub fn chunk_file(content: &str, file_path: &str, provenance: Option<&Provenance>) -> Vec<Chunk> {
    Chunker::new().chunk_file(content, file_path, provenance)
}
