//! Transformation job orchestration
//!
//! Drives one transformation event end to end: fetch each input file's
//! content batches, chunk the assembled source, persist the chunked
//! batch document, and report the output location per file.

use crate::chunk::{Chunker, Detected};
use crate::error::{Error, Result};
use crate::event::{
    parse_location, BatchDocument, ContentBatch, OutputFile, TransformationEvent,
    TransformationOutput,
};
use crate::provenance::Provenance;
use crate::settings::Settings;
use crate::storage::Storage;
use crate::TRANSFORMATION_KEY_PREFIX;
use tracing::{debug, info};

/// Key under which a file's chunked batch document is persisted
fn output_key(job_id: &str, file_path: &str) -> String {
    format!("{TRANSFORMATION_KEY_PREFIX}/{job_id}/{file_path}.json")
}

/// Process a transformation event.
///
/// Every input file is fetched from the event's bucket, chunked, and
/// written to the configured transformation bucket under
/// `transformations/{job_id}/{file_path}.json`. The returned output
/// lists one descriptor per input file, preserving input order and
/// carrying each file's metadata through unchanged.
pub async fn run_transformation(
    event: &TransformationEvent,
    store: &dyn Storage,
    settings: &Settings,
) -> Result<TransformationOutput> {
    if settings.transformation_bucket.is_empty() {
        return Err(Error::Config(
            "transformation bucket is not configured".to_string(),
        ));
    }

    let chunker = Chunker::new().with_max_chunk_size(settings.max_chunk_size);

    info!(
        job_id = %event.ingestion_job_id,
        files = event.input_files.len(),
        "starting transformation"
    );

    let mut output_files = Vec::with_capacity(event.input_files.len());

    for input in &event.input_files {
        let (_, file_path) = parse_location(&input.original_file_location.s3_location.uri)?;
        info!(
            file_path = %file_path,
            language = ?Detected::from_path(&file_path),
            "processing input file"
        );

        let provenance = Provenance::from_path(&file_path);

        // batches arrive pre-split; their bodies concatenate back into one source
        let mut source = String::new();
        for batch in &input.content_batches {
            let raw = store.get_object(&event.bucket_name, &batch.key).await?;
            let document: BatchDocument = serde_json::from_slice(&raw).map_err(|e| {
                Error::Input(format!("malformed content batch {}: {e}", batch.key))
            })?;
            source.push_str(&document.joined_body());
        }

        let chunks = chunker.chunk_file(&source, &file_path, provenance.as_ref());
        debug!(file_path = %file_path, chunks = chunks.len(), "chunked input file");

        let document = BatchDocument::from_chunks(&chunks);
        let body = serde_json::to_vec(&document)?;

        let key = output_key(&event.ingestion_job_id, &file_path);
        store
            .put_object(&settings.transformation_bucket, &key, body, "application/json")
            .await?;
        debug!(key = %key, "persisted chunk batch");

        output_files.push(OutputFile {
            original_file_location: input.original_file_location.clone(),
            file_metadata: input.file_metadata.clone(),
            content_batches: vec![ContentBatch { key }],
        });
    }

    info!(
        job_id = %event.ingestion_job_id,
        files = output_files.len(),
        "transformation complete"
    );

    Ok(TransformationOutput { output_files })
}
