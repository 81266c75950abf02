//! Chunkmill Core Library
//!
//! Core functionality for the chunkmill ingestion chunking engine.
//!
//! # Features
//! - Tree-sitter structural chunking for TypeScript, JavaScript, Java, and C#
//! - Paragraph-based chunking for text and unparseable code
//! - Git provenance derived from object key layout
//! - Batch transformation jobs over pluggable object storage

pub mod chunk;
pub mod error;
pub mod event;
pub mod job;
pub mod provenance;
pub mod scan;
pub mod settings;
pub mod storage;

pub use chunk::{chunk_text, Chunk, ChunkKind, Chunker, Detected, Language, DEFAULT_MAX_CHUNK_SIZE};
pub use error::{ChunkmillError, Error, Result};
pub use event::{
    parse_location, BatchDocument, ContentBatch, FileContent, FileLocation, InputFile, OutputFile,
    S3Location, TransformationEvent, TransformationOutput,
};
pub use job::run_transformation;
pub use provenance::Provenance;
pub use scan::{scan_files, ScanOptions, ScanResult};
pub use settings::Settings;
pub use storage::{FsStore, S3Store, Storage};

/// Key prefix under which transformed batch documents are written
pub const TRANSFORMATION_KEY_PREFIX: &str = "transformations";
