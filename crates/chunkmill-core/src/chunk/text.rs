//! Paragraph-based text chunking
//!
//! Fallback chunker for prose, markup, and any code file the structural
//! extractor produced nothing for. Splits on blank lines and packs
//! paragraphs greedily into chunks bounded by `max_chunk_size` bytes. A
//! single paragraph larger than the bound is never split.

use super::types::{Chunk, ChunkKind};
use crate::provenance::Provenance;
use lazy_static::lazy_static;
use regex::Regex;

/// Default byte bound for a packed text chunk
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Chunk `content` by paragraph.
///
/// Whitespace-only content yields no chunks. Buffered paragraphs are
/// rejoined with a blank line; chunk contents are trimmed. Line spans
/// are 1-based and cover the first through last non-whitespace line of
/// the buffered paragraphs.
pub fn chunk_text(
    content: &str,
    file_path: &str,
    provenance: Option<&Provenance>,
    max_chunk_size: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_start_line = 1;
    let mut buffer_end_line = 1;

    for (span_start, span_end) in paragraph_spans(content) {
        let paragraph = &content[span_start..span_end];
        if paragraph.trim().is_empty() {
            continue;
        }
        let (start_line, end_line) = line_span(content, span_start, paragraph);

        if !buffer.is_empty() && buffer.len() + paragraph.len() > max_chunk_size {
            chunks.push(text_chunk(
                &buffer,
                file_path,
                provenance,
                buffer_start_line,
                buffer_end_line,
            ));
            buffer.clear();
        }

        if buffer.is_empty() {
            buffer_start_line = start_line;
        } else {
            buffer.push_str("\n\n");
        }
        buffer.push_str(paragraph);
        buffer_end_line = end_line;
    }

    if !buffer.trim().is_empty() {
        chunks.push(text_chunk(
            &buffer,
            file_path,
            provenance,
            buffer_start_line,
            buffer_end_line,
        ));
    }

    chunks
}

/// Byte spans between paragraph separators, in order
fn paragraph_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut last = 0;
    for separator in PARAGRAPH_BREAK.find_iter(content) {
        spans.push((last, separator.start()));
        last = separator.end();
    }
    spans.push((last, content.len()));
    spans
}

/// 1-based line span of a paragraph's trimmed content
fn line_span(content: &str, span_start: usize, paragraph: &str) -> (usize, usize) {
    let leading_ws = paragraph.len() - paragraph.trim_start().len();
    let start_line = content[..span_start + leading_ws].matches('\n').count() + 1;
    let end_line = start_line + paragraph.trim().matches('\n').count();
    (start_line, end_line)
}

fn text_chunk(
    buffer: &str,
    file_path: &str,
    provenance: Option<&Provenance>,
    start_line: usize,
    end_line: usize,
) -> Chunk {
    Chunk {
        content: buffer.trim().to_string(),
        language: None,
        file_path: file_path.to_string(),
        kind: ChunkKind::Text,
        name: None,
        start_line,
        end_line,
        provenance: provenance.cloned(),
    }
}
