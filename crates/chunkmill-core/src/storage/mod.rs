//! Object storage backends
//!
//! The job only ever fetches content batches and persists chunk batches,
//! so the seam is two operations. `S3Store` talks to real or
//! S3-compatible object storage; `FsStore` serves local runs and tests
//! from a directory tree.

pub mod fs;
pub mod s3;

pub use fs::FsStore;
pub use s3::S3Store;

use crate::error::Result;
use async_trait::async_trait;

/// Object store used for batch fetch and chunk persistence
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch an object's bytes
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Write an object
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}
