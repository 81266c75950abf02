//! Transformation request/response wire model
//!
//! The ingestion service hands the job a JSON event naming the source
//! bucket and the files to process; the job answers with a response
//! listing, per input file, where the persisted chunk batches landed.
//! All keys are camelCase except the literal `s3_location` and `type`
//! keys inside file locations, which the upstream contract spells this
//! way.

use crate::chunk::Chunk;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content type tag for persisted chunk bodies
pub const TEXT_CONTENT_TYPE: &str = "TEXT";

lazy_static! {
    static ref LOCATION_RE: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://([^/]+)/(.+)$").unwrap();
}

/// Split a `scheme://bucket/key` object URI into bucket and key
pub fn parse_location(uri: &str) -> Result<(String, String)> {
    let captures = LOCATION_RE
        .captures(uri)
        .ok_or_else(|| Error::Input(format!("Invalid object location URI: {uri}")))?;
    Ok((captures[1].to_string(), captures[2].to_string()))
}

/// A transformation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationEvent {
    pub version: String,
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub ingestion_job_id: String,
    /// Bucket holding the content batches listed in `input_files`
    pub bucket_name: String,
    pub prior_task: String,
    pub input_files: Vec<InputFile>,
}

/// One file to process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFile {
    pub original_file_location: FileLocation,
    /// Upstream metadata, passed through to the response untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_metadata: Option<BTreeMap<String, String>>,
    pub content_batches: Vec<ContentBatch>,
}

/// Where a file lives in object storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLocation {
    #[serde(rename = "type")]
    pub location_type: String,
    pub s3_location: S3Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Location {
    pub uri: String,
}

/// Pointer to one persisted batch object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBatch {
    pub key: String,
}

/// A transformation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationOutput {
    pub output_files: Vec<OutputFile>,
}

/// Response descriptor for one processed file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    pub original_file_location: FileLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_metadata: Option<BTreeMap<String, String>>,
    pub content_batches: Vec<ContentBatch>,
}

/// Persisted batch format: the chunks of one file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDocument {
    pub file_contents: Vec<FileContent>,
}

/// One chunk as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub content_body: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub content_metadata: BTreeMap<String, String>,
}

impl BatchDocument {
    /// Build the persisted document for a file's chunks
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        Self {
            file_contents: chunks
                .iter()
                .map(|chunk| FileContent {
                    content_body: chunk.content.clone(),
                    content_type: TEXT_CONTENT_TYPE.to_string(),
                    content_metadata: chunk.content_metadata(),
                })
                .collect(),
        }
    }

    /// Reassemble the bodies of an upstream batch into one source string
    pub fn joined_body(&self) -> String {
        self.file_contents
            .iter()
            .map(|content| content.content_body.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
