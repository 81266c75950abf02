//! Filesystem-backed object store
//!
//! Maps `bucket/key` onto `<root>/<bucket>/<key>` so a transformation
//! can run against a local directory. Keys that would escape the root
//! are rejected.

use super::Storage;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
            return Err(Error::Input(format!("Invalid bucket name: {bucket}")));
        }
        if key.is_empty() || key.starts_with('/') || key.split('/').any(|segment| segment == "..")
        {
            return Err(Error::Input(format!("Invalid object key: {key}")));
        }
        Ok(self.root.join(bucket).join(key))
    }
}

#[async_trait]
impl Storage for FsStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to read {}: {e}", path.display())))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        _content_type: &str,
    ) -> Result<()> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write {}: {e}", path.display())))
    }
}
