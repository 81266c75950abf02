//! Runtime settings
//!
//! All knobs come from the environment so the job runs unchanged in a
//! function runtime, a container, or locally. Reading settings never
//! fails; a missing transformation bucket only surfaces once a job
//! actually tries to persist chunks.

use crate::chunk::DEFAULT_MAX_CHUNK_SIZE;

/// Environment-driven configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bucket receiving persisted chunk batches (`CHUNKMILL_TRANSFORMATION_BUCKET`)
    pub transformation_bucket: String,

    /// Object store region (`CHUNKMILL_S3_REGION`)
    pub region: String,

    /// Custom object store endpoint for MinIO/LocalStack (`CHUNKMILL_S3_ENDPOINT`)
    pub endpoint: Option<String>,

    /// Paragraph chunk byte bound (`CHUNKMILL_MAX_CHUNK_SIZE`)
    pub max_chunk_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transformation_bucket: std::env::var("CHUNKMILL_TRANSFORMATION_BUCKET")
                .unwrap_or_default(),
            region: default_region(),
            endpoint: std::env::var("CHUNKMILL_S3_ENDPOINT").ok(),
            max_chunk_size: std::env::var("CHUNKMILL_MAX_CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CHUNK_SIZE),
        }
    }
}

fn default_region() -> String {
    std::env::var("CHUNKMILL_S3_REGION").unwrap_or_else(|_| "us-east-1".to_string())
}

impl Settings {
    /// Read settings from the environment
    pub fn from_env() -> Self {
        Self::default()
    }
}
