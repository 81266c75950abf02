//! Chunk command

use crate::app::{ChunkArgs, OutputFormat};
use anyhow::Result;
use chunkmill_core::{scan_files, BatchDocument, Chunk, Chunker, Error, Provenance, ScanOptions};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileChunks {
    file_path: String,
    #[serde(flatten)]
    document: BatchDocument,
}

pub async fn run(args: ChunkArgs, format: OutputFormat) -> Result<()> {
    let mut chunker = Chunker::new();
    if let Some(max) = args.max_chunk_size {
        chunker = chunker.with_max_chunk_size(max);
    }

    let mut results: Vec<(String, Vec<Chunk>)> = Vec::new();

    if args.path.is_dir() {
        let options = ScanOptions {
            pattern: args.pattern.clone(),
            ..Default::default()
        };
        for entry in scan_files(&args.path, &options)? {
            let content = match std::fs::read_to_string(&entry.path) {
                Ok(content) => content,
                Err(e) => {
                    debug!(path = %entry.path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            collect(&chunker, &mut results, &content, entry.relative_path);
        }
    } else if args.path.is_file() {
        let content = std::fs::read_to_string(&args.path)?;
        let name = args
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        collect(&chunker, &mut results, &content, name);
    } else {
        return Err(Error::Input(format!("no such path: {}", args.path.display())).into());
    }

    match format {
        OutputFormat::Json => {
            let documents: Vec<FileChunks> = results
                .iter()
                .map(|(file_path, chunks)| FileChunks {
                    file_path: file_path.clone(),
                    document: BatchDocument::from_chunks(chunks),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
        OutputFormat::Cli => {
            for (file_path, chunks) in &results {
                for chunk in chunks {
                    let span = format!(
                        "{}:{}-{} {}",
                        file_path,
                        chunk.start_line,
                        chunk.end_line,
                        chunk.kind.as_str()
                    );
                    match &chunk.name {
                        Some(name) => println!("{span} {name}"),
                        None => println!("{span}"),
                    }
                }
            }
        }
    }

    Ok(())
}

fn collect(
    chunker: &Chunker,
    results: &mut Vec<(String, Vec<Chunk>)>,
    content: &str,
    file_path: String,
) {
    let provenance = Provenance::from_path(&file_path);
    let chunks = chunker.chunk_file(content, &file_path, provenance.as_ref());
    if !chunks.is_empty() {
        results.push((file_path, chunks));
    }
}
